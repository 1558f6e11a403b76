//! # Row Store
//!
//! SQLite persistence through sqlx: connection pool, schema and one
//! repository per entity type.

mod cheese_repo;
mod config;
mod database;
mod errors;
mod repository;
mod schema;
mod wine_repo;

pub use cheese_repo::CheeseRepository;
pub use config::StoreConfig;
pub use database::Database;
pub use errors::{StoreError, StoreResult};
pub use repository::Repository;
pub use wine_repo::WineRepository;
