use super::Store;
use crate::domain::Category;

/// Database row for category
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
        }
    }
}

impl Store {
    /// All categories, alphabetical by type
    pub async fn categories_by_type(&self) -> sqlx::Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, type FROM categories ORDER BY type ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Category type labels in id order, the order clients index them by
    pub async fn category_types(&self) -> sqlx::Result<Vec<String>> {
        sqlx::query_scalar("SELECT type FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_category(&self, category_id: i64) -> sqlx::Result<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a category and return its id. Categories are seeded out of band;
    /// there is no HTTP route for this.
    pub async fn insert_category(&self, kind: &str) -> sqlx::Result<i64> {
        sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind(kind)
            .fetch_one(&self.pool)
            .await
    }
}
