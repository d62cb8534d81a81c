//! Simulation state representation.
//!
//! This module owns the per-entity attribute record and the world container
//! that orders entities, allocates their ids and keeps the cemetery. Entities
//! mutate their own records through behaviours; actions and the engine reach
//! other entities only through [`World`].
pub mod types;

pub use types::{DataKey, EntityData, EntityId, Input, Tick, World};
