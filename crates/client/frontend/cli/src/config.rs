//! CLI-specific configuration.
use std::env;
use std::path::PathBuf;

/// Terminal session configuration.
///
/// Everything is optional: without a scenario file the stock arena is
/// played, without a config file the default rules apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// RON scenario to load instead of the stock arena.
    pub scenario_path: Option<PathBuf>,
    /// TOML game configuration.
    pub game_config_path: Option<PathBuf>,
    /// Names the log sub-directory of this session.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COMPOSITION_SCENARIO` - Path to a RON scenario
    /// - `COMPOSITION_GAME_CONFIG` - Path to a TOML game config
    /// - `COMPOSITION_SESSION_ID` - Session identifier (default: `session_<unix time>`)
    /// - `COMPOSITION_LOG_DIR` - Log directory root
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            scenario_path: read("COMPOSITION_SCENARIO").map(PathBuf::from),
            game_config_path: read("COMPOSITION_GAME_CONFIG").map(PathBuf::from),
            session_id: read("COMPOSITION_SESSION_ID"),
            log_dir: read("COMPOSITION_LOG_DIR").map(PathBuf::from),
        }
    }
}
