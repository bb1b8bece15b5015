//! Admin API trait

use async_trait::async_trait;

use crate::client::models::{User, UserFilter, UserRole};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// User administration. Requires an admin token.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_users(
        &self,
        filter: &UserFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<User>>;

    async fn get_user(&self, user_id: &str) -> Result<User>;

    async fn set_user_role(&self, user_id: &str, role: UserRole) -> Result<User>;

    async fn deactivate_user(&self, user_id: &str) -> Result<User>;
}
