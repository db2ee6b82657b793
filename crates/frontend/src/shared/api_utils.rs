//! API utilities for frontend-backend communication
//!
//! Every request carries the bearer token saved by the login flow. Failures
//! are reported as `ApiError`; pages show its text in an alert block.

use crate::system::auth::storage;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Backend port used when no explicit base URL was configured at build time.
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Sesi tidak ditemukan, silakan login kembali")]
    NotAuthenticated,

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Get the base URL for API requests
///
/// `ADMIN_API_BASE` set at build time wins; otherwise the URL is built from
/// the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

async fn send(request: Request) -> Result<gloo_net::http::Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.status() == 401 {
        storage::clear_access_token();
        return Err(ApiError::NotAuthenticated);
    }
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = authorized(Request::get(&api_url(path)))?
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::put(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api_url(path)))?
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "Server responded with status 404");
        assert_eq!(
            ApiError::Decode("expected value".to_string()).to_string(),
            "Failed to parse response: expected value"
        );
    }
}
