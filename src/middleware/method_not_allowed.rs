//! JSON bodies for framework-generated 405 responses

use axum::{
    http::{header::ALLOW, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Replace axum's empty 405 with the standard error body, keeping `Allow`.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut replaced = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(ALLOW, allow);
    }
    replaced
}
