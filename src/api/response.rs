//! Standard API response types

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope: the payload's fields next to `"success": true`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        deleted: i64,
    }

    #[test]
    fn success_flag_sits_beside_payload() {
        let value = serde_json::to_value(ApiResponse::new(Payload { deleted: 3 })).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "deleted": 3}));
    }
}
