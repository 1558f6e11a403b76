//! # HTTP Server
//!
//! Main HTTP server combining the health route and one CRUD router per
//! resource.

use std::io;
use std::net::SocketAddr;

use axum::http::Uri;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::DomainError;
use crate::store::Database;

use super::config::HttpServerConfig;
use super::crud_routes::crud_routes;
use super::health_routes::health_routes;

/// HTTP server for the wine and cheese API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an opened database
    pub fn new(config: HttpServerConfig, db: Database) -> Self {
        let router = Self::build_router(&config, &db);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, db: &Database) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let timeout = db.round_trip_timeout();

        Router::new()
            .merge(health_routes(db.clone()))
            .merge(crud_routes(db.wines(), timeout))
            .merge(crud_routes(db.cheeses(), timeout))
            .fallback(route_not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn route_not_found(uri: Uri) -> DomainError {
    tracing::debug!(%uri, "no route");
    DomainError::NotFound("Route")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;

    async fn test_db() -> Database {
        Database::open(&StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), test_db().await);
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(8080), test_db().await);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, test_db().await).router();
    }
}
