use super::{Behaviour, Lifecycle};
use crate::state::{DataKey, EntityData, Input};

/// Seeds the base sprite layer. Never expires.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Drawable {
    sprite: String,
}

impl Drawable {
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            sprite: sprite.into(),
        }
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }
}

impl Lifecycle for Drawable {
    const LAST: bool = true;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        data.seed_drawing_layers(&self.sprite);
    }

    // The layer stack may hold overlays from other behaviours; leave it.
    fn end(&self, _data: &mut EntityData) {}

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        Some(self.clone().into())
    }
}

/// Places the entity on the track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Positioned {
    initial_position: i32,
}

impl Positioned {
    pub fn new(initial_position: i32) -> Self {
        Self { initial_position }
    }

    pub fn initial_position(&self) -> i32 {
        self.initial_position
    }
}

impl Lifecycle for Positioned {
    const LAST: bool = false;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        data.seed_position(self.initial_position);
    }

    fn end(&self, data: &mut EntityData) {
        data.remove(DataKey::Position);
    }

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        Some(self.clone().into())
    }
}

/// Owns the attack key outright: `start` overwrites whatever is there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attacker {
    attack: f64,
}

impl Attacker {
    pub fn new(attack: f64) -> Self {
        Self { attack }
    }

    pub fn attack(&self) -> f64 {
        self.attack
    }
}

impl Lifecycle for Attacker {
    const LAST: bool = true;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        data.set_attack(self.attack);
    }

    fn end(&self, data: &mut EntityData) {
        data.remove(DataKey::Attack);
    }

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        Some(self.clone().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawable_keeps_existing_stack() {
        let mut data = EntityData::new();
        Drawable::new("XXXXXXXX").start(&mut data);
        Drawable::new("--o::::>").start(&mut data);

        assert_eq!(data.drawing_layers(), Some(&["XXXXXXXX".to_owned()][..]));
    }

    #[test]
    fn positioned_end_pops_position() {
        let mut data = EntityData::new();
        let mut positioned = Positioned::new(3);
        positioned.start(&mut data);
        data.set_position(5);

        // renewal does not reset a moved entity
        let mut renewed = positioned.step(&mut data, Input('s')).unwrap();
        renewed.start(&mut data);
        assert_eq!(data.position(), Some(5));

        renewed.end(&mut data);
        assert_eq!(data.position(), None);
    }

    #[test]
    fn attacker_overwrites_and_pops() {
        let mut data = EntityData::new();
        data.set_attack(7.0);

        let mut attacker = Attacker::new(2.0);
        attacker.start(&mut data);
        assert_eq!(data.attack(), Some(2.0));

        attacker.end(&mut data);
        assert_eq!(data.attack(), None);
    }
}
