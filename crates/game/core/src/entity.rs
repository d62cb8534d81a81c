//! Entities: one attribute record plus an ordered list of behaviours.
//!
//! [`Entity::attach`] is the only insertion path. It is used at construction,
//! by actions, and inside [`Entity::update`] when rebuilding the behaviour
//! list for the next tick, so merge rules apply uniformly everywhere.

use tracing::debug;

use crate::action::ControlMap;
use crate::behaviour::{Behaviour, BehaviourKind};
use crate::state::{EntityData, EntityId, Input};

/// How [`Entity::attach`] placed an incoming behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// No existing behaviour composed with it; it was started and appended.
    Inserted,
    /// An existing behaviour of this kind absorbed it; the merged result
    /// replaced that behaviour at the end of the list.
    Merged {
        replaced: BehaviourKind,
        result: BehaviourKind,
    },
}

/// A simulated entity.
///
/// Attached entities (instruments) are referenced by id; they live in the
/// [`World`](crate::state::World) and keep ticking while held.
#[derive(Clone, Debug)]
pub struct Entity {
    id: EntityId,
    name: String,
    data: EntityData,
    behaviours: Vec<Behaviour>,
    attached: Vec<EntityId>,
    controls: Option<ControlMap>,
}

impl Entity {
    /// Creates an entity and attaches `behaviours` one by one, in order.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        behaviours: impl IntoIterator<Item = Behaviour>,
    ) -> Self {
        let mut entity = Self {
            id,
            name: name.into(),
            data: EntityData::new(),
            behaviours: Vec::new(),
            attached: Vec::new(),
            controls: None,
        };
        for behaviour in behaviours {
            entity.attach(behaviour);
        }
        entity
    }

    pub fn with_controls(mut self, controls: ControlMap) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &EntityData {
        &self.data
    }

    /// Direct access for actions; behaviours see the same record next tick.
    pub fn data_mut(&mut self) -> &mut EntityData {
        &mut self.data
    }

    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }

    pub fn kinds(&self) -> impl Iterator<Item = BehaviourKind> + '_ {
        self.behaviours.iter().map(Behaviour::kind)
    }

    pub fn has(&self, kind: BehaviourKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    /// True once the entity holds the terminal `Dead` behaviour.
    pub fn is_dead(&self) -> bool {
        self.has(BehaviourKind::Dead)
    }

    pub fn controls(&self) -> Option<&ControlMap> {
        self.controls.as_ref()
    }

    pub fn attached(&self) -> &[EntityId] {
        &self.attached
    }

    pub fn attached_mut(&mut self) -> &mut Vec<EntityId> {
        &mut self.attached
    }

    /// The instrument used by actions: the first attached entity.
    pub fn held(&self) -> Option<EntityId> {
        self.attached.first().copied()
    }

    /// Copies of every transitive behaviour, ready to attach elsewhere.
    pub fn transitive_behaviours(&self) -> Vec<Behaviour> {
        self.behaviours
            .iter()
            .filter(|behaviour| behaviour.is_transitive())
            .map(Behaviour::transferred)
            .collect()
    }

    /// Attaches `behaviour`, merging it into the first existing behaviour
    /// that composes with it.
    pub fn attach(&mut self, behaviour: Behaviour) -> AttachOutcome {
        let outcome = attach_into(&mut self.data, &mut self.behaviours, behaviour);
        debug!(
            target: "core::entity",
            entity = %self.id,
            ?outcome,
            "behaviour attached"
        );
        outcome
    }

    /// Ends and removes the first behaviour of `kind`. No-op if none match.
    pub fn detach(&mut self, kind: BehaviourKind) -> Option<Behaviour> {
        let index = self.behaviours.iter().position(|b| b.kind() == kind)?;
        let removed = self.behaviours.remove(index);
        removed.end(&mut self.data);
        debug!(target: "core::entity", entity = %self.id, %kind, "behaviour detached");
        Some(removed)
    }

    /// Advances every behaviour by one tick.
    ///
    /// Replacements are merged among themselves only (never against the
    /// previous list), expired behaviours are ended immediately, and the
    /// result is stably sorted with `last` behaviours at the end.
    pub fn update(&mut self, input: Input) {
        let current = std::mem::take(&mut self.behaviours);
        let mut next = Vec::with_capacity(current.len());

        for behaviour in current {
            match behaviour.step(&mut self.data, input) {
                Some(replacement) => {
                    attach_into(&mut self.data, &mut next, replacement);
                }
                None => {
                    behaviour.end(&mut self.data);
                    debug!(
                        target: "core::entity",
                        entity = %self.id,
                        kind = %behaviour.kind(),
                        "behaviour expired"
                    );
                }
            }
        }

        next.sort_by_key(Behaviour::is_last);
        self.behaviours = next;
    }
}

/// Attach algorithm shared by [`Entity::attach`] and [`Entity::update`].
///
/// Scans `behaviours` in order; the first one whose `compose(&incoming)`
/// yields a value is ended and removed, and the merged result is started and
/// appended. Otherwise `incoming` is started and appended.
fn attach_into(
    data: &mut EntityData,
    behaviours: &mut Vec<Behaviour>,
    mut incoming: Behaviour,
) -> AttachOutcome {
    let merge = behaviours
        .iter()
        .enumerate()
        .find_map(|(index, existing)| existing.compose(&incoming).map(|merged| (index, merged)));

    match merge {
        Some((index, mut merged)) => {
            let replaced = behaviours.remove(index);
            replaced.end(data);
            merged.start(data);
            let outcome = AttachOutcome::Merged {
                replaced: replaced.kind(),
                result: merged.kind(),
            };
            behaviours.push(merged);
            outcome
        }
        None => {
            incoming.start(data);
            behaviours.push(incoming);
            AttachOutcome::Inserted
        }
    }
}
