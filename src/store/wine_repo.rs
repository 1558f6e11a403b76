//! Wine repository

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::model::{NewWine, Wine};

use super::errors::StoreResult;
use super::repository::Repository;

/// Statements against the `wines` table
#[derive(Debug, Clone)]
pub struct WineRepository {
    pool: SqlitePool,
}

impl WineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for WineRepository {
    type Entity = Wine;
    type Draft = NewWine;

    async fn list(&self) -> StoreResult<Vec<Wine>> {
        let wines = sqlx::query_as::<_, Wine>("SELECT * FROM wines ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(wines)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Wine>> {
        let wine = sqlx::query_as::<_, Wine>("SELECT * FROM wines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(wine)
    }

    async fn create(&self, draft: &NewWine) -> StoreResult<Wine> {
        let wine = sqlx::query_as::<_, Wine>(
            "INSERT INTO wines (name, description, country, colour) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.country)
        .bind(&draft.colour)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(wine_id = wine.id, "wine created");
        Ok(wine)
    }

    async fn update(&self, id: i64, draft: &NewWine) -> StoreResult<Option<Wine>> {
        let wine = sqlx::query_as::<_, Wine>(
            "UPDATE wines SET name = $1, description = $2, country = $3, colour = $4 \
             WHERE id = $5 RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.country)
        .bind(&draft.colour)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(wine)
    }

    /// Unlink every cheese paired with the wine, then delete it, in one
    /// transaction. Nothing is changed when the wine does not exist.
    ///
    /// A cheese write naming this wine either commits first and is unlinked
    /// here, or runs after the commit and fails the foreign key.
    async fn delete(&self, id: i64) -> StoreResult<Option<Wine>> {
        let mut tx = self.pool.begin().await?;

        let unlinked = sqlx::query("UPDATE cheeses SET wine_id = NULL WHERE wine_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query_as::<_, Wine>("DELETE FROM wines WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        match deleted {
            Some(wine) => {
                tx.commit().await?;
                tracing::debug!(wine_id = id, unlinked, "wine deleted");
                Ok(Some(wine))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }
}
