use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filedemo_core::config::file_path_from_env_value;
use filedemo_core::constants::{DEFAULT_REST_ADDR, FILE_RESOURCE_PATH_ENV, REST_ADDR_ENV};
use filedemo_core::CoreConfig;

/// Main entry point for the filedemo service
///
/// Resolves the managed file path once against the current working directory, then serves
/// the REST API.
///
/// # Environment Variables
/// - `FILE_RESOURCE_PATH`: File path relative to the working directory (default: "files/demo.txt")
/// - `FILEDEMO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the working directory cannot be read or the file path does not name a file,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("filedemo=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let relative_path = file_path_from_env_value(std::env::var(FILE_RESOURCE_PATH_ENV).ok());
    let cfg = Arc::new(CoreConfig::from_current_dir(&relative_path)?);

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!("++ Managing file at {}", cfg.file_path().display());
    tracing::info!("++ Starting filedemo REST on {}", addr);

    let app = api_rest::app(cfg);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
