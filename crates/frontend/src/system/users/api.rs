use contracts::system::users::{DeleteUsersDto, SetUserActiveDto, User};

use crate::shared::api_utils::{get_json, post_json, put_json, ApiError};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json("/api/system/users").await
}

/// Block or unblock a user account
pub async fn set_active(id: &str, is_active: bool) -> Result<(), ApiError> {
    let dto = SetUserActiveDto {
        id: id.to_string(),
        is_active,
    };
    put_json(&format!("/api/system/users/{}/active", id), &dto).await
}

/// Delete several users at once
pub async fn delete_users(ids: Vec<String>) -> Result<(), ApiError> {
    post_json("/api/system/users/delete-batch", &DeleteUsersDto { ids }).await
}
