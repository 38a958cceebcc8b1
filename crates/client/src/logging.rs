//! File-based tracing setup.
//!
//! Stdout carries the game text, so logs go only to a per-session file.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn setup_logging(session_id: Option<&str>, log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let root = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_directory);
    let session_log_dir = root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory, e.g. `~/.cache/devlife/logs` on Linux.
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "devlife")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("devlife").join("logs"))
}
