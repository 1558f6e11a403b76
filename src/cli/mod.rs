//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Apply the schema and run the HTTP API
//! - migrate: Apply the schema and exit

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{migrate, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
