//! Server binary for the Mergington activities service.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `mergington-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the activity directory from the seed catalog
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use mergington_api::AppState;
use mergington_core::{ActivityDirectory, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "mergington-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("mergington-server starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir.display(),
        log_level = config.logging.level,
        "Server settings"
    );

    // 3. Seed the directory.
    let directory = ActivityDirectory::seeded();
    info!(activity_count = directory.len(), "Activity directory seeded");

    // 4. Serve.
    let state = Arc::new(AppState::new(directory, config.server.static_dir.clone()));
    mergington_api::start_server(&config.server, state)
        .await
        .map_err(ServerBinError::from)?;

    info!("mergington-server shutdown complete");
    Ok(())
}

/// Load the service configuration, reporting whether the file was present.
///
/// Environment overrides apply in both cases.
fn load_config() -> Result<(ServiceConfig, bool), ServerBinError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((ServiceConfig::from_file(config_path)?, true))
    } else {
        let mut config = ServiceConfig::default();
        config.server.apply_env_overrides();
        Ok((config, false))
    }
}
