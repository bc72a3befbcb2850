pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiError;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::category_questions),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::post_questions),
        )
        .route("/questions/:question_id", delete(questions::delete_question))
        // Quiz play
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::not_found("No such route")
}
