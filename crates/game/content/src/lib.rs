//! Data-driven content for the composition engine.
//!
//! This crate houses the sprite catalogue and scenario definitions and
//! provides loaders for RON/TOML data files:
//! - Scenarios (entity lists with their starting behaviours, RON)
//! - Game configuration (TOML)
//!
//! Content only seeds a world; it never appears in the running state.

pub mod scenario;
pub mod sprites;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{EntitySpec, ScenarioSpec};
pub use sprites::Sprite;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
