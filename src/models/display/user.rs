//! Platform user display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::User;

/// User display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub full_name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            full_name: or_dash(user.full_name),
            role: user.role.to_string(),
            active: if user.is_active { "yes" } else { "no" }.to_string(),
        }
    }
}
