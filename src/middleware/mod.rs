//! HTTP middleware

pub mod method_not_allowed;
pub mod request_id;

pub use method_not_allowed::json_method_not_allowed;
pub use request_id::{request_id_layer, X_REQUEST_ID};
