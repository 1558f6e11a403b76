//! Observability
//!
//! Structured logging through `tracing`. HTTP request spans come from
//! `tower_http::trace::TraceLayer` in the server.

mod logger;

pub use logger::{init, LogFormat, DEFAULT_FILTER};
