//! CLI command implementations

use serde_json::json;

use crate::http_server::HttpServer;
use crate::observability;
use crate::store::Database;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            database_url,
            log_format,
        } => {
            let config = Config::load_or_default(config.as_deref())?
                .with_overrides(port, database_url, log_format)?;
            serve(config)
        }
        Command::Migrate {
            config,
            database_url,
        } => {
            let config = Config::load_or_default(config.as_deref())?
                .with_overrides(None, database_url, None)?;
            migrate(config)
        }
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Open the database, apply the schema and serve until Ctrl-C
pub fn serve(config: Config) -> CliResult<()> {
    observability::init(config.log_format);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server.socket_addr(),
        "starting pairings"
    );

    let rt = runtime()?;
    rt.block_on(async {
        let db = Database::open(&config.store).await?;
        let server = HttpServer::new(config.server.clone(), db.clone());

        let served = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        db.close().await;
        served
    })
}

/// Apply the schema and exit
pub fn migrate(config: Config) -> CliResult<()> {
    observability::init(config.log_format);

    let rt = runtime()?;
    rt.block_on(async {
        let db = Database::open(&config.store).await?;
        db.close().await;
        Ok::<(), CliError>(())
    })?;

    write_response(json!({"migrated": true, "database_url": config.store.database_url}))
}
