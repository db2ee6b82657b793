use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Access token from localStorage
pub fn get_access_token() -> Option<String> {
    local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Forget the session after the backend rejected the token
pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
