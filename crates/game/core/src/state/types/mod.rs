pub mod common;
pub mod data;
pub mod world;

// Re-export common types
pub use common::{EntityId, Input, Tick};

// Re-export the per-entity record
pub use data::{DataKey, EntityData};

// Re-export the world container
pub use world::World;
