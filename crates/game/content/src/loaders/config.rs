//! Game configuration loader.

use std::path::Path;

use composition_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = config_file("reach = 2\n");

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.reach, 2);
        assert_eq!(config.min_position, GameConfig::DEFAULT_MIN_POSITION);
        assert_eq!(config.max_position, GameConfig::DEFAULT_MAX_POSITION);
    }

    #[test]
    fn track_end_can_be_shortened() {
        let file = config_file("max_position = 6\n");

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.max_position, 6);
        assert!(!config.is_on_track(7));
    }

    #[test]
    fn empty_file_is_default_config() {
        let file = config_file("");

        assert_eq!(ConfigLoader::load(file.path()).unwrap(), GameConfig::default());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let file = config_file("reach = \"far\"\n");

        let error = ConfigLoader::load(file.path()).unwrap_err();

        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
