//! # HTTP Server Module
//!
//! Axum server exposing the wine and cheese resources.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/wines/*` - Wine CRUD
//! - `/cheeses/*` - Cheese CRUD

pub mod config;
pub mod crud_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use crud_routes::crud_routes;
pub use server::HttpServer;
