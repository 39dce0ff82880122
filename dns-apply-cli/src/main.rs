//! dns-apply entry point
//!
//! Reads per-user DNS record declarations from the local records directory
//! and converges them against the deSEC rrsets API, one record at a time.

mod apply;
mod config;
mod declaration;
mod error;

use std::process::ExitCode;

use dns_apply_provider::DesecProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Progress goes to stderr at info level; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("=== Starting DNS Apply Process ===");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let writer = DesecProvider::new(config.api_token.clone(), &config.domain);

    match apply::apply_all(&config, &writer).await {
        Ok(stats) => {
            tracing::info!(
                "=== DNS Apply Completed ({} record(s) across {} file(s)) ===",
                stats.records,
                stats.files
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
