use contracts::domain::census::CensusRecord;

use crate::shared::api_utils::{delete, get_json, put_json, ApiError};

/// Census records of one region (all regions for central staff)
pub async fn fetch_records(region: Option<&str>) -> Result<Vec<CensusRecord>, ApiError> {
    match region {
        Some(region) => get_json(&format!("/api/census?region={}", urlencoding::encode(region))).await,
        None => get_json("/api/census").await,
    }
}

pub async fn mark_moved(id: &str) -> Result<(), ApiError> {
    put_json(&format!("/api/census/{}/moved", id), &serde_json::json!({})).await
}

pub async fn delete_record(id: &str) -> Result<(), ApiError> {
    delete(&format!("/api/census/{}", id)).await
}
