//! # CRUD Routes
//!
//! One set of handlers, generic over the repository, mounted once per
//! resource:
//!
//! - `GET    /{resource}/`    list (200, possibly empty)
//! - `GET    /{resource}/:id` fetch (200 | 404)
//! - `POST   /{resource}/`    create (201 | 400)
//! - `PUT    /{resource}/:id` full replace (200 | 400 | 404)
//! - `DELETE /{resource}/:id` remove (200 | 404)
//!
//! The collection path is also served without the trailing slash. Any other
//! method on these paths is a 405 in the error envelope.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::get;
use axum::Router;

use crate::api::{DomainError, DomainResult, EntityId, JsonBody, Reply, Resource};
use crate::store::{Repository, StoreResult};

/// Per-resource state shared by its handlers
pub struct CrudState<R> {
    repo: R,
    round_trip_timeout: Duration,
}

impl<R: Repository> CrudState<R> {
    pub fn new(repo: R, round_trip_timeout: Duration) -> Self {
        Self {
            repo,
            round_trip_timeout,
        }
    }

    /// Await one store call, bounded by the round-trip timeout.
    /// Dropping the call on timeout rolls back any open transaction.
    async fn round_trip<T, F>(&self, call: F) -> DomainResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match tokio::time::timeout(self.round_trip_timeout, call).await {
            Ok(result) => result.map_err(DomainError::from),
            Err(_) => Err(DomainError::Timeout),
        }
    }
}

type Shared<R> = State<Arc<CrudState<R>>>;

/// Build the routes for the resource stored by `repo`
pub fn crud_routes<R>(repo: R, round_trip_timeout: Duration) -> Router
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    let state = Arc::new(CrudState::new(repo, round_trip_timeout));
    let collection = format!("/{}", <R::Entity as Resource>::PATH);
    let item = format!("{}/:id", collection);

    Router::new()
        .route(
            &collection,
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            &format!("{}/", collection),
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            &item,
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Method fallback for every route this service mounts
pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> DomainError {
    tracing::debug!(%method, %uri, "method not allowed");
    DomainError::MethodNotAllowed
}

async fn list_handler<R>(State(state): Shared<R>) -> DomainResult<Reply<Vec<R::Entity>>>
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    let rows = state.round_trip(state.repo.list()).await?;
    Ok(Reply::ok(rows))
}

async fn get_handler<R>(
    State(state): Shared<R>,
    EntityId(id): EntityId,
) -> DomainResult<Reply<R::Entity>>
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    state
        .round_trip(state.repo.get_by_id(id))
        .await?
        .map(Reply::ok)
        .ok_or(DomainError::NotFound(<R::Entity as Resource>::NAME))
}

async fn create_handler<R>(
    State(state): Shared<R>,
    JsonBody(fields): JsonBody<<R::Entity as Resource>::Fields>,
) -> DomainResult<Reply<R::Entity>>
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    let draft = <R::Entity as Resource>::validate(&fields)?;
    let created = state.round_trip(state.repo.create(&draft)).await?;
    Ok(Reply::created(created))
}

async fn update_handler<R>(
    State(state): Shared<R>,
    EntityId(id): EntityId,
    JsonBody(fields): JsonBody<<R::Entity as Resource>::Fields>,
) -> DomainResult<Reply<R::Entity>>
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    let draft = <R::Entity as Resource>::validate(&fields)?;
    state
        .round_trip(state.repo.update(id, &draft))
        .await?
        .map(Reply::ok)
        .ok_or(DomainError::NotFound(<R::Entity as Resource>::NAME))
}

async fn delete_handler<R>(
    State(state): Shared<R>,
    EntityId(id): EntityId,
) -> DomainResult<Reply<R::Entity>>
where
    R: Repository,
    R::Entity: Resource<Draft = R::Draft>,
{
    state
        .round_trip(state.repo.delete(id))
        .await?
        .map(Reply::ok)
        .ok_or(DomainError::NotFound(<R::Entity as Resource>::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Wine;
    use crate::store::{StoreConfig, Database};

    #[tokio::test]
    async fn test_round_trip_timeout_maps_to_domain_error() {
        let db = Database::open(&StoreConfig::in_memory()).await.unwrap();
        let state = CrudState::new(db.wines(), Duration::from_millis(10));

        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<Vec<Wine>, crate::store::StoreError>(Vec::new())
        };
        let err = state.round_trip(slow).await.unwrap_err();

        assert!(matches!(err, DomainError::Timeout));
        assert_eq!(err.status_code().as_u16(), 500);
    }

    #[tokio::test]
    async fn test_routes_build_for_both_resources() {
        let db = Database::open(&StoreConfig::in_memory()).await.unwrap();
        let _wines = crud_routes(db.wines(), db.round_trip_timeout());
        let _cheeses = crud_routes(db.cheeses(), db.round_trip_timeout());
    }
}
