//! pairings - a wine and cheese catalogue served over a JSON HTTP API
//!
//! Two resources backed by SQLite: wines, and cheeses that may be paired
//! with a wine. Deleting a wine unpairs its cheeses in the same transaction.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
