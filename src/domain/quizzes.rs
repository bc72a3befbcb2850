//! Quiz play types

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use super::Question;

/// Category id that stands for "any category"
pub const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category to restrict candidates to, if any
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

/// Response for `POST /quizzes`; `question` is null once every candidate has been asked.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}
