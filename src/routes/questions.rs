//! Question routes
//!
//! Listing, deleting, creating and searching questions.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::api::{paginate, ApiResponse, PaginationParams};
use crate::app::AppState;
use crate::domain::{
    QuestionCreatedResponse, QuestionDeletedResponse, QuestionListResponse,
    QuestionSearchResponse, QuestionsPostAction, QuestionsPostRequest,
};
use crate::error::{ApiError, ApiResult};

/// GET /questions?page=N
///
/// List all questions ordered by text, one page at a time.
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, ApiError>,
) -> ApiResult<ApiResponse<QuestionListResponse>> {
    let page = pagination.page()?;

    let questions = state.store.all_questions().await?;
    if questions.is_empty() {
        return Err(ApiError::not_found("No questions stored"));
    }

    let total_questions = questions.len() as u64;
    let categories = state.store.category_types().await?;

    Ok(ApiResponse::new(QuestionListResponse {
        questions: paginate(questions, page),
        total_questions,
        categories,
        current_cateogry: Vec::new(),
    }))
}

/// DELETE /questions/:question_id
///
/// Delete a question and return the first page of what remains.
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(question_id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, ApiError>,
) -> ApiResult<ApiResponse<QuestionDeletedResponse>> {
    let page = pagination.page()?;

    state
        .store
        .find_question(question_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Question {question_id} not found")))?;

    // A concurrent delete may have won the race since the lookup.
    if !state.store.delete_question(question_id).await? {
        return Err(ApiError::not_found(format!("Question {question_id} not found")));
    }
    tracing::info!(question_id, "Question deleted");

    let remaining = state.store.all_questions().await?;
    let total_questions = remaining.len() as u64;

    Ok(ApiResponse::new(QuestionDeletedResponse {
        deleted: question_id,
        total_questions,
        questions: paginate(remaining, page),
    }))
}

/// POST /questions
///
/// Search when the body carries a non-empty `searchTerm`, otherwise create a
/// question from `question`, `answer`, `difficulty` and `category`.
pub async fn post_questions(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, ApiError>,
    WithRejection(Json(req), _): WithRejection<Json<QuestionsPostRequest>, ApiError>,
) -> ApiResult<Response> {
    let page = pagination.page()?;

    match req.into_action()? {
        QuestionsPostAction::Search(term) => {
            let matches = state.store.search_questions(&term).await?;
            tracing::debug!(term = %term, matches = matches.len(), "Question search");

            let total_questions = matches.len() as u64;
            Ok(ApiResponse::new(QuestionSearchResponse {
                questions: paginate(matches, page),
                total_questions,
            })
            .into_response())
        }
        QuestionsPostAction::Create(new_question) => {
            let created = state.store.insert_question(&new_question).await?;
            tracing::info!(
                question_id = created,
                category = new_question.category,
                "Question created"
            );

            let questions = state.store.all_questions().await?;
            let total_questions = questions.len() as u64;
            Ok(ApiResponse::new(QuestionCreatedResponse {
                created,
                questions: paginate(questions, page),
                total_questions,
            })
            .into_response())
        }
    }
}
