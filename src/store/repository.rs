//! Repository trait shared by both entity types

use async_trait::async_trait;

use super::errors::StoreResult;

/// CRUD over one table.
///
/// Absence is reported as `None`, never as an error; the caller decides
/// whether a missing row is a failure.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Persisted row type
    type Entity: Send;

    /// Validated field set written on create and update
    type Draft: Send + Sync;

    /// All rows, ordered by id. Empty is a valid result.
    async fn list(&self) -> StoreResult<Vec<Self::Entity>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Self::Entity>>;

    /// Insert and return the generated row
    async fn create(&self, draft: &Self::Draft) -> StoreResult<Self::Entity>;

    /// Replace every field of the row; `None` if it does not exist
    async fn update(&self, id: i64, draft: &Self::Draft) -> StoreResult<Option<Self::Entity>>;

    /// Remove the row and return it; `None` if it did not exist
    async fn delete(&self, id: i64) -> StoreResult<Option<Self::Entity>>;
}
