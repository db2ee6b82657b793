use contracts::domain::pindah_sambung::{TransferDecisionDto, TransferRequest};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_requests() -> Result<Vec<TransferRequest>, ApiError> {
    get_json("/api/pindah-sambung").await
}

/// Approve or reject a pending request
pub async fn decide(id: &str, approve: bool) -> Result<(), ApiError> {
    let dto = TransferDecisionDto {
        id: id.to_string(),
        approve,
        note: None,
    };
    post_json(&format!("/api/pindah-sambung/{}/decision", id), &dto).await
}
