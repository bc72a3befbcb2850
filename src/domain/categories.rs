//! Category domain types

use serde::{Deserialize, Serialize};

use super::Question;

/// Category entity. Read-only from the API's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response for `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response for `GET /categories/:category_id/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: Vec<String>,
    pub current_category: String,
}
