use serde::{Deserialize, Serialize};

/// Роль пользователя панели администрирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Operator,
    Viewer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Operator => "operator",
            UserRole::Viewer => "viewer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Operator => "Operator",
            UserRole::Viewer => "Peninjau",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    /// Wilayah (region code) the account is scoped to; `None` for central staff
    pub region: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetUserActiveDto {
    pub id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUsersDto {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_payload() {
        let json = r#"{
            "id": "u-17",
            "username": "sekretariat",
            "email": null,
            "full_name": "Sekretariat Pusat",
            "role": "operator",
            "region": "JKT",
            "is_active": true,
            "created_at": "2024-03-15T14:02:26Z",
            "last_login_at": null
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Operator);
        assert_eq!(user.region.as_deref(), Some("JKT"));
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_serializes_as_snake_case() {
        let value = serde_json::to_value(UserRole::Admin).unwrap();
        assert_eq!(value, serde_json::json!("admin"));
        assert_eq!(UserRole::Viewer.code(), "viewer");
    }
}
