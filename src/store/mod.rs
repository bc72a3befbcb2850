//! Data store for trivia questions and categories
//!
//! A cheap-to-clone handle over the SQLite pool. Each method issues its own
//! statements; there are no multi-statement transactions.

mod categories;
mod questions;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
