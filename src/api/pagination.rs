//! Pagination utilities for list endpoints

use serde::Deserialize;

use crate::error::ApiError;

/// Questions shown per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<i64>,
}

impl PaginationParams {
    /// Returns the requested page, 1 when absent. Pages below 1 are rejected.
    pub fn page(&self) -> Result<usize, ApiError> {
        match self.page {
            None => Ok(1),
            Some(page) if page >= 1 => usize::try_from(page)
                .map_err(|_| ApiError::bad_request(format!("page {page} is out of range"))),
            Some(page) => Err(ApiError::bad_request(format!(
                "page must be 1 or greater, got {page}"
            ))),
        }
    }
}

/// Items `[(page-1)*10, page*10)` of `items`; empty past the end.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
