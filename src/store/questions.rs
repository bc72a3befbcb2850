use super::Store;
use crate::domain::{NewQuestion, Question};

/// Database row for question
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// Unicode-aware case-insensitive substring test; `needle` is already
/// lowercased. Wildcard characters in it are plain text.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Store {
    /// Every question, ordered by question text
    pub async fn all_questions(&self) -> sqlx::Result<Vec<Question>> {
        let rows =
            sqlx::query_as::<_, QuestionRow>(&format!("{QUESTION_COLUMNS} ORDER BY question ASC"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_question(&self, question_id: i64) -> sqlx::Result<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!("{QUESTION_COLUMNS} WHERE id = $1"))
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a question and return its generated id
    pub async fn insert_question(&self, new: &NewQuestion) -> sqlx::Result<i64> {
        sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    /// Delete a question; returns whether a row was removed
    pub async fn delete_question(&self, question_id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match on question text.
    ///
    /// SQLite's `LOWER` and `LIKE` fold ASCII only, so folding happens here.
    pub async fn search_questions(&self, term: &str) -> sqlx::Result<Vec<Question>> {
        let needle = term.to_lowercase();

        Ok(self
            .all_questions()
            .await?
            .into_iter()
            .filter(|q| contains_folded(&q.question, &needle))
            .collect())
    }

    /// Questions filed under `category_id`, ordered by question text
    pub async fn questions_in_category(&self, category_id: i64) -> sqlx::Result<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "{QUESTION_COLUMNS} WHERE category = $1 ORDER BY question ASC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Questions not yet asked, optionally restricted to one category.
    ///
    /// The asked ids travel as a single JSON array bind, so their count is not
    /// bounded by SQLite's host parameter limit.
    pub async fn quiz_candidates(
        &self,
        previous_questions: &[i64],
        category_id: Option<i64>,
    ) -> sqlx::Result<Vec<Question>> {
        let asked = serde_json::to_string(previous_questions)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            r#"
            {QUESTION_COLUMNS}
            WHERE id NOT IN (SELECT value FROM json_each($1))
              AND ($2 IS NULL OR category = $2)
            ORDER BY id ASC
            "#
        ))
        .bind(asked)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
