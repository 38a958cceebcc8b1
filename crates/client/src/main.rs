//! DevLife client binary.
//!
//! # Examples
//!
//! ```bash
//! # Deterministic session with instant messages
//! DEVLIFE_SEED=42 DEVLIFE_AUTO_REVEAL=false cargo run -p devlife-client
//!
//! # Custom catalog
//! DEVLIFE_DATA_DIR=./my-data cargo run -p devlife-client
//! ```

use anyhow::Result;
use devlife_client::{CliApp, ClientConfig, logging};
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let runtime_config = RuntimeConfig {
        auto_reveal: client_config.auto_reveal,
        ..RuntimeConfig::from_env()
    };

    // 2. Setup logging
    let _log_guard = logging::setup_logging(
        client_config.session_id.as_deref(),
        client_config.log_dir.as_deref(),
    )?;

    tracing::info!("Starting DevLife client");
    tracing::info!("Session ID: {:?}", client_config.session_id);
    tracing::info!("Auto reveal: {}", client_config.auto_reveal);

    // 3. Build Runtime
    let runtime = Runtime::start(runtime_config).await?;
    tracing::info!("Runtime built successfully");

    // 4. Run the frontend until the player quits
    let app = CliApp::new(runtime.handle(), runtime.oracles().clone(), client_config);
    let result = app.run().await;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    result
}
