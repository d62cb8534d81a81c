//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::ScenarioSpec;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// RON format: `ScenarioSpec(entities: [EntitySpec(name, behaviours, controlled), ...])`
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let scenario: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use composition_core::{Alive, Behaviour, InFire};

    const BUNDLED_ARENA: &str = include_str!("../../data/arena.ron");

    #[test]
    fn bundled_arena_matches_default() {
        let scenario = ScenarioLoader::parse(BUNDLED_ARENA).unwrap();

        assert_eq!(scenario, ScenarioSpec::default_arena());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                entities: [
                    (name: "torch", behaviours: [Alive(3.0), InFire(2)]),
                ],
            )"#
        )
        .unwrap();

        let scenario = ScenarioLoader::load(file.path()).unwrap();

        assert_eq!(scenario.entities.len(), 1);
        let torch = &scenario.entities[0];
        assert_eq!(torch.name, "torch");
        assert!(!torch.controlled);
        assert_eq!(
            torch.behaviours,
            vec![
                Behaviour::from(Alive::new(3.0)),
                Behaviour::from(InFire::new(2)),
            ]
        );
    }

    #[test]
    fn unknown_behaviour_is_rejected() {
        let error = ScenarioLoader::parse(r#"(entities: [(name: "x", behaviours: [Frozen(1)])])"#)
            .unwrap_err();

        assert!(error.to_string().contains("Failed to parse scenario RON"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let error = ScenarioLoader::load(&dir.path().join("absent.ron")).unwrap_err();

        assert!(error.to_string().contains("Failed to read file"));
    }
}
