//! API response types and pagination utilities

pub mod pagination;
pub mod response;

pub use pagination::{paginate, PaginationParams, QUESTIONS_PER_PAGE};
pub use response::ApiResponse;
