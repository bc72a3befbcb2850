//! Question domain types

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::error::ApiError;

/// Question entity, in the shape clients receive it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Body of `POST /questions`.
///
/// The same endpoint searches when `searchTerm` is non-empty and creates a
/// question otherwise. Numeric fields also accept their string form since
/// HTML selects post them that way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
}

/// What a `POST /questions` body asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsPostAction {
    Search(String),
    Create(NewQuestion),
}

/// Validated input for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl QuestionsPostRequest {
    pub fn into_action(self) -> Result<QuestionsPostAction, ApiError> {
        if let Some(term) = self.search_term.filter(|t| !t.is_empty()) {
            return Ok(QuestionsPostAction::Search(term));
        }

        let question = self
            .question
            .ok_or_else(|| ApiError::bad_request("question is required"))?;
        let answer = self
            .answer
            .ok_or_else(|| ApiError::bad_request("answer is required"))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| ApiError::bad_request("difficulty is required"))?;
        let category = self
            .category
            .ok_or_else(|| ApiError::bad_request("category is required"))?;

        Ok(QuestionsPostAction::Create(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        }))
    }
}

/// Response for `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: Vec<String>,
    // Key spelling is what existing clients read.
    pub current_cateogry: Vec<String>,
}

/// Response for `DELETE /questions/:question_id`
#[derive(Debug, Serialize)]
pub struct QuestionDeletedResponse {
    pub deleted: i64,
    pub total_questions: u64,
    pub questions: Vec<Question>,
}

/// Response for `POST /questions` in create mode
#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Response for `POST /questions` in search mode
#[derive(Debug, Serialize)]
pub struct QuestionSearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> QuestionsPostRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn search_term_selects_search() {
        let action = parse(serde_json::json!({"searchTerm": "title"}))
            .into_action()
            .unwrap();
        assert_eq!(action, QuestionsPostAction::Search("title".to_string()));
    }

    #[test]
    fn empty_search_term_falls_back_to_create() {
        let action = parse(serde_json::json!({
            "searchTerm": "",
            "question": "Who?",
            "answer": "Me",
            "difficulty": 1,
            "category": "3"
        }))
        .into_action()
        .unwrap();
        assert_eq!(
            action,
            QuestionsPostAction::Create(NewQuestion {
                question: "Who?".to_string(),
                answer: "Me".to_string(),
                difficulty: 1,
                category: 3,
            })
        );
    }

    #[test]
    fn create_requires_every_field() {
        let err = parse(serde_json::json!({"question": "Who?", "answer": "Me", "difficulty": 2}))
            .into_action()
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn question_serializes_flat() {
        let q = Question {
            id: 4,
            question: "What?".to_string(),
            answer: "That".to_string(),
            category: 2,
            difficulty: 5,
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            serde_json::json!({
                "id": 4,
                "question": "What?",
                "answer": "That",
                "category": 2,
                "difficulty": 5
            })
        );
    }
}
