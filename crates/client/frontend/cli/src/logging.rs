//! File-only tracing setup.
//!
//! The terminal is the game board, so nothing is logged to stdout or stderr.
//! Each session writes `client.log` under its own directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

pub const LOG_FILE_NAME: &str = "client.log";

/// Installs the global subscriber and returns the session log directory.
///
/// Filtering follows `RUST_LOG` on top of an `info` baseline.
pub fn setup_logging(config: &CliConfig) -> Result<PathBuf> {
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = log_directory(config.log_dir.as_deref()).join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer must outlive every log call of the process.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE_NAME).display());

    Ok(session_log_dir)
}

/// Root log directory: the override when given, else the platform cache.
///
/// - Linux: `~/.cache/composition/logs` (or `$XDG_CACHE_HOME/composition/logs`)
/// - macOS: `~/Library/Caches/composition/logs`
/// - Windows: `%LOCALAPPDATA%\composition\cache\logs`
/// - Fallback: `<temp dir>/composition/logs`
pub fn log_directory(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    directories::ProjectDirs::from("", "", "composition")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("composition"))
        .join("logs")
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = Path::new("/var/log/composition");

        assert_eq!(log_directory(Some(dir)), dir);
    }

    #[test]
    fn platform_directory_ends_in_logs() {
        assert!(log_directory(None).ends_with("logs"));
    }

    #[test]
    fn session_ids_are_prefixed() {
        assert!(default_session_id().starts_with("session_"));
    }
}
