//! Stdio front end for the query constants endpoint.
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout:
//!
//! ```text
//! {"endpoint": "query/constants", "query": "SELECT * FROM db.t WHERE x = 1"}
//! ```
//!
//! The optional first argument is a JSON config file. `SQLCONST_*`
//! variables override it, and `RUST_LOG` overrides `log_level`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sqlconst::{server::dispatch, ServiceConfig};

/// Uses `RUST_LOG` if set, otherwise the configured `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level).with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ServiceConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    init_tracing(&config.log_level)?;
    info!(environment = %config.environment, "sqlconst server reading stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal");
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read request")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let mut response = dispatch(&line);
                response.push('\n');
                stdout.write_all(response.as_bytes()).await.context("failed to write response")?;
                stdout.flush().await.context("failed to flush response")?;
            }
            () = &mut shutdown => break,
        }
    }

    info!("sqlconst server stopped");
    Ok(())
}
