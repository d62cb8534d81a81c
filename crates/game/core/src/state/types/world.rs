use tracing::info;

use super::{EntityId, Input, Tick};
use crate::action::ControlMap;
use crate::behaviour::Behaviour;
use crate::config::GameConfig;
use crate::entity::Entity;

/// Ordered collection of live entities plus the cemetery of dead ones.
///
/// World order matters: actions resolve targets by scanning it front to back
/// and the engine runs controlled entities' actions in this order.
#[derive(Clone, Debug)]
pub struct World {
    config: GameConfig,
    entities: Vec<Entity>,
    cemetery: Vec<Entity>,
    /// Sequential entity ID allocator (monotonically increasing, never reused).
    next_entity_id: u32,
    turn: Tick,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            cemetery: Vec::new(),
            next_entity_id: 0,
            turn: Tick::ZERO,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of completed turns.
    pub fn turn(&self) -> Tick {
        self.turn
    }

    pub(crate) fn advance_turn(&mut self) -> Tick {
        self.turn = self.turn.next();
        self.turn
    }

    /// Allocates a new unique EntityId.
    ///
    /// # Panics
    ///
    /// Panics if we've exhausted all available IDs.
    fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self
            .next_entity_id
            .checked_add(1)
            .expect("EntityId overflow");
        id
    }

    /// Creates an entity at the back of the world order.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        behaviours: impl IntoIterator<Item = Behaviour>,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities.push(Entity::new(id, name, behaviours));
        id
    }

    /// Like [`spawn`](Self::spawn), for an entity driven by input.
    pub fn spawn_controlled(
        &mut self,
        name: impl Into<String>,
        behaviours: impl IntoIterator<Item = Behaviour>,
        controls: ControlMap,
    ) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities
            .push(Entity::new(id, name, behaviours).with_controls(controls));
        id
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn cemetery(&self) -> &[Entity] {
        &self.cemetery
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// First entity (in world order) standing at `position`.
    pub fn entity_at(&self, position: i32) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|entity| entity.data().position() == Some(position))
            .map(Entity::id)
    }

    /// True while at least one live entity reacts to input.
    pub fn has_controlled(&self) -> bool {
        self.entities
            .iter()
            .any(|entity| entity.controls().is_some_and(|controls| !controls.is_empty()))
    }

    /// Every symbol some live entity is bound to.
    pub fn control_symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self
            .entities
            .iter()
            .filter_map(Entity::controls)
            .flat_map(ControlMap::symbols)
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    /// Ticks every live entity once, in world order.
    pub fn update_all(&mut self, input: Input) {
        for entity in &mut self.entities {
            entity.update(input);
        }
    }

    /// Moves every dead entity to the cemetery, returning their ids.
    ///
    /// Survivors stop holding anything that was buried.
    pub fn bury_dead(&mut self) -> Vec<EntityId> {
        let (dead, alive): (Vec<Entity>, Vec<Entity>) = std::mem::take(&mut self.entities)
            .into_iter()
            .partition(Entity::is_dead);
        self.entities = alive;

        let buried: Vec<EntityId> = dead.iter().map(Entity::id).collect();
        if !buried.is_empty() {
            for entity in &mut self.entities {
                entity.attached_mut().retain(|id| !buried.contains(id));
            }
        }
        for entity in &dead {
            info!(
                target: "core::world",
                entity = %entity.id(),
                name = entity.name(),
                turn = %self.turn,
                "entity died"
            );
        }
        self.cemetery.extend(dead);
        buried
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
