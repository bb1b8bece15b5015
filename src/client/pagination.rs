//! Pagination helpers for list requests
//!
//! The backend pages with `skip`/`limit` offsets.

/// Largest `limit` the backend accepts
pub const MAX_PAGE_SIZE: usize = 500;

/// Pagination parameters for list requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().limit(25).page(2);
/// assert_eq!(params.skip, Some(50));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Number of records to skip
    pub skip: Option<usize>,
    /// Maximum number of records to return
    pub limit: Option<usize>,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size, capped at [`MAX_PAGE_SIZE`].
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.clamp(1, MAX_PAGE_SIZE));
        self
    }

    /// Jump to a 0-indexed page of the current page size.
    pub fn page(mut self, page: usize) -> Self {
        let size = self.limit.unwrap_or(MAX_PAGE_SIZE);
        self.skip = Some(page.saturating_mul(size));
        self
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}

/// Combine resource filters with optional pagination.
pub(crate) fn with_pagination(
    mut params: Vec<(&'static str, String)>,
    pagination: Option<&PaginationParams>,
) -> Vec<(&'static str, String)> {
    if let Some(p) = pagination {
        params.extend(p.to_query_params());
    }
    params
}
