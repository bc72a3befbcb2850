use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::api::ApiResponse;
use crate::app::AppState;
use crate::domain::{QuizRequest, QuizResponse};
use crate::error::{ApiError, ApiResult};

/// POST /quizzes
///
/// Pick a random question the player has not seen yet, optionally within one
/// category. `question` is null when none are left.
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(req), _): WithRejection<Json<QuizRequest>, ApiError>,
) -> ApiResult<ApiResponse<QuizResponse>> {
    let candidates = state
        .store
        .quiz_candidates(&req.previous_questions, req.quiz_category.filter())
        .await?;

    let question = candidates.choose(&mut rand::thread_rng()).cloned();

    if question.is_none() {
        tracing::debug!(
            category = req.quiz_category.id,
            asked = req.previous_questions.len(),
            "No quiz questions left"
        );
    }

    Ok(ApiResponse::new(QuizResponse { question }))
}
