//! CLI argument definitions using clap
//!
//! Commands:
//! - pairings serve [--config <path>] [--port <port>] [--database-url <url>]
//! - pairings migrate [--config <path>] [--database-url <url>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Pairings - wine and cheese catalogue API
#[derive(Parser, Debug)]
#[command(name = "pairings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the schema and serve the HTTP API
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// sqlx database url, e.g. sqlite://pairings.db
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Log output format: pretty or json
        #[arg(long, env = "PAIRINGS_LOG_FORMAT")]
        log_format: Option<LogFormat>,
    },

    /// Apply the schema and exit
    Migrate {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// sqlx database url, e.g. sqlite://pairings.db
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "pairings",
            "serve",
            "--port",
            "8080",
            "--database-url",
            "sqlite::memory:",
            "--log-format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                port,
                database_url,
                log_format,
                ..
            } => {
                assert_eq!(port, Some(8080));
                assert_eq!(database_url.as_deref(), Some("sqlite::memory:"));
                assert_eq!(log_format, Some(LogFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_with_config() {
        let cli = Cli::try_parse_from(["pairings", "migrate", "--config", "./pairings.json"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate { config: Some(_), .. }));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["pairings", "serve", "--port", "wine"]).is_err());
    }
}
