//! Scenario definitions: which entities populate a fresh world.

use composition_core::{
    Alive, Attacker, Behaviour, ControlMap, Drawable, GameConfig, InFire, Positioned, Wet, World,
};

use crate::sprites::Sprite;

/// One entity to spawn. Behaviours are attached in the listed order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySpec {
    pub name: String,
    pub behaviours: Vec<Behaviour>,
    /// Driven by the stock keyboard layout.
    #[cfg_attr(feature = "serde", serde(default))]
    pub controlled: bool,
}

impl EntitySpec {
    pub fn new(name: impl Into<String>, behaviours: impl IntoIterator<Item = Behaviour>) -> Self {
        Self {
            name: name.into(),
            behaviours: behaviours.into_iter().collect(),
            controlled: false,
        }
    }

    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }
}

/// Ordered entity list; spawn order becomes world order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub entities: Vec<EntitySpec>,
}

impl ScenarioSpec {
    /// Player, a soaked bear and two instruments lying on the track.
    pub fn default_arena() -> Self {
        Self {
            entities: vec![
                EntitySpec::new(
                    "player",
                    [
                        Alive::new(1.0).into(),
                        Drawable::new(Sprite::Player).into(),
                        Attacker::new(1.0).into(),
                        Positioned::new(0).into(),
                    ],
                )
                .controlled(),
                EntitySpec::new(
                    "monster",
                    [
                        Alive::new(10.0).into(),
                        Drawable::new(Sprite::Bear).into(),
                        Positioned::new(4).into(),
                        Wet::new(20).into(),
                    ],
                ),
                EntitySpec::new(
                    "fire sword",
                    [
                        Drawable::new(Sprite::Sword).into(),
                        Attacker::new(1.0).into(),
                        InFire::new(20).into(),
                        Positioned::new(2).into(),
                    ],
                ),
                EntitySpec::new(
                    "lance",
                    [
                        Drawable::new(Sprite::Lance).into(),
                        Attacker::new(1.0).into(),
                        Positioned::new(3).into(),
                    ],
                ),
            ],
        }
    }

    pub fn build_world(&self, config: GameConfig) -> World {
        let mut world = World::new(config);
        for spec in &self.entities {
            let behaviours = spec.behaviours.iter().cloned();
            if spec.controlled {
                world.spawn_controlled(spec.name.as_str(), behaviours, ControlMap::keyboard());
            } else {
                world.spawn(spec.name.as_str(), behaviours);
            }
        }
        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{BehaviourKind, EntityId};

    #[test]
    fn default_arena_keeps_spawn_order() {
        let world = ScenarioSpec::default_arena().build_world(GameConfig::default());

        let names: Vec<_> = world.entities().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["player", "monster", "fire sword", "lance"]);
        assert_eq!(world.entity_at(0), Some(EntityId(0)));
        assert_eq!(world.entity_at(4), Some(EntityId(1)));
        assert_eq!(world.entity_at(2), Some(EntityId(2)));
        assert_eq!(world.entity_at(3), Some(EntityId(3)));
    }

    #[test]
    fn only_the_player_is_controlled() {
        let world = ScenarioSpec::default_arena().build_world(GameConfig::default());

        let controlled: Vec<_> = world
            .entities()
            .iter()
            .filter(|e| e.controls().is_some())
            .map(|e| e.name())
            .collect();
        assert_eq!(controlled, ["player"]);
    }

    #[test]
    fn starting_overlays_are_drawn() {
        let world = ScenarioSpec::default_arena().build_world(GameConfig::default());

        let monster = world.entity(EntityId(1)).unwrap();
        assert!(monster.has(BehaviourKind::Wet));
        assert_eq!(
            monster.data().drawing_layers().unwrap(),
            [Sprite::Bear.as_str(), "oooooooo"]
        );

        let sword = world.entity(EntityId(2)).unwrap();
        assert_eq!(
            sword.data().drawing_layers().unwrap(),
            [Sprite::Sword.as_str(), "********"]
        );
    }
}
