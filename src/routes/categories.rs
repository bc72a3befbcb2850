//! Category routes

use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::api::{paginate, ApiResponse, PaginationParams};
use crate::app::AppState;
use crate::domain::{CategoriesResponse, CategoryQuestionsResponse};
use crate::error::{ApiError, ApiResult};

/// GET /categories
///
/// Category labels in alphabetical order.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<ApiResponse<CategoriesResponse>> {
    let categories = state
        .store
        .categories_by_type()
        .await?
        .into_iter()
        .map(|c| c.kind)
        .collect();

    Ok(ApiResponse::new(CategoriesResponse { categories }))
}

/// GET /categories/:category_id/questions
///
/// Questions filed under one category, paginated. 404 when the category is
/// unknown or holds no questions.
pub async fn category_questions(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(category_id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, ApiError>,
) -> ApiResult<ApiResponse<CategoryQuestionsResponse>> {
    let page = pagination.page()?;

    let category = state
        .store
        .find_category(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Category {category_id} not found")))?;

    let questions = state.store.questions_in_category(category_id).await?;
    if questions.is_empty() {
        return Err(ApiError::not_found(format!(
            "Category {category_id} has no questions"
        )));
    }

    let total_questions = questions.len() as u64;
    let categories = state.store.category_types().await?;

    Ok(ApiResponse::new(CategoryQuestionsResponse {
        questions: paginate(questions, page),
        total_questions,
        categories,
        current_category: category.kind,
    }))
}
