//! Platform user models (admin area)

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Access role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    FleetManager,
    Dispatcher,
    Accountant,
    Driver,
    Customer,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Platform user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Id,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Body for `PATCH /admin/users/{id}/role`
#[derive(Debug, Clone, Serialize)]
pub struct RoleUpdate {
    pub role: UserRole,
}

/// Filters for `GET /admin/users`
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl UserFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "role", self.role.as_ref());
        push_opt(&mut params, "is_active", self.is_active.as_ref());
        push_opt(&mut params, "search", self.search.as_ref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_active() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "email": "a@example.com", "role": "dispatcher"}"#)
                .unwrap();
        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Dispatcher);
    }

    #[test]
    fn test_role_filter_uses_wire_name() {
        let filter = UserFilter {
            role: Some(UserRole::FleetManager),
            is_active: Some(false),
            search: None,
        };
        assert_eq!(
            filter.to_query_params(),
            vec![
                ("role", "fleet_manager".to_string()),
                ("is_active", "false".to_string())
            ]
        );
    }
}
