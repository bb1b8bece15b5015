//! Route optimization API trait

use async_trait::async_trait;

use crate::client::models::{OptimizationResult, RouteOptimizationRequest};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

#[async_trait]
pub trait RouteApi: Send + Sync {
    /// Submit stops and vehicles; the backend solves and returns the plan
    async fn optimize_routes(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<OptimizationResult>;

    /// Past optimization runs, newest first
    async fn list_optimizations(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<OptimizationResult>>;

    async fn get_optimization(&self, optimization_id: &str) -> Result<OptimizationResult>;
}
