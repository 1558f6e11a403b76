//! Table definitions
//!
//! Applied idempotently on `migrate` and at server start.

use sqlx::SqlitePool;

use super::errors::StoreResult;

/// Statements run in order by [`apply`]
pub const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS wines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        country TEXT NOT NULL,
        colour TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS cheeses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        country TEXT NOT NULL,
        milk_type TEXT NOT NULL,
        wine_id INTEGER REFERENCES wines(id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_cheeses_wine_id ON cheeses(wine_id)",
];

/// Create both tables and the cheese → wine index
pub async fn apply(pool: &SqlitePool) -> StoreResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
