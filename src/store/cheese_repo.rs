//! Cheese repository

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::model::{Cheese, NewCheese};

use super::errors::StoreResult;
use super::repository::Repository;

/// Statements against the `cheeses` table
#[derive(Debug, Clone)]
pub struct CheeseRepository {
    pool: SqlitePool,
}

impl CheeseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for CheeseRepository {
    type Entity = Cheese;
    type Draft = NewCheese;

    async fn list(&self) -> StoreResult<Vec<Cheese>> {
        let cheeses = sqlx::query_as::<_, Cheese>("SELECT * FROM cheeses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(cheeses)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Cheese>> {
        let cheese = sqlx::query_as::<_, Cheese>("SELECT * FROM cheeses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cheese)
    }

    async fn create(&self, draft: &NewCheese) -> StoreResult<Cheese> {
        let cheese = sqlx::query_as::<_, Cheese>(
            "INSERT INTO cheeses (name, description, country, milk_type, wine_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.country)
        .bind(&draft.milk_type)
        .bind(draft.wine_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(cheese_id = cheese.id, wine_id = draft.wine_id, "cheese created");
        Ok(cheese)
    }

    async fn update(&self, id: i64, draft: &NewCheese) -> StoreResult<Option<Cheese>> {
        let cheese = sqlx::query_as::<_, Cheese>(
            "UPDATE cheeses SET name = $1, description = $2, country = $3, milk_type = $4, \
             wine_id = $5 WHERE id = $6 RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.country)
        .bind(&draft.milk_type)
        .bind(draft.wine_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cheese)
    }

    async fn delete(&self, id: i64) -> StoreResult<Option<Cheese>> {
        let cheese = sqlx::query_as::<_, Cheese>("DELETE FROM cheeses WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cheese)
    }
}
