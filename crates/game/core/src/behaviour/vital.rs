use super::{Behaviour, Lifecycle};
use crate::state::{DataKey, EntityData, Input};

/// Seeds health and watches it; turns into [`Dead`] once it is spent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Alive {
    initial_health: f64,
}

impl Alive {
    pub fn new(initial_health: f64) -> Self {
        Self { initial_health }
    }

    pub fn initial_health(&self) -> f64 {
        self.initial_health
    }
}

impl Lifecycle for Alive {
    const LAST: bool = true;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        data.seed_health(self.initial_health);
    }

    fn end(&self, data: &mut EntityData) {
        data.remove(DataKey::Health);
    }

    /// Requires the health key, which `start` guarantees unless another
    /// party popped it; a missing key is read as spent health.
    fn step(&self, data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        match data.health() {
            Some(health) if health > 0.0 => Some(self.clone().into()),
            _ => Some(Dead::new(self.initial_health).into()),
        }
    }
}

/// Terminal marker. Produces nothing on its first step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dead {
    initial_health: f64,
}

impl Dead {
    pub fn new(initial_health: f64) -> Self {
        Self { initial_health }
    }

    pub fn initial_health(&self) -> f64 {
        self.initial_health
    }
}

impl Lifecycle for Dead {
    const LAST: bool = true;
    const TRANSITIVE: bool = false;

    fn start(&mut self, _data: &mut EntityData) {}

    fn end(&self, _data: &mut EntityData) {}

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        None
    }
}
