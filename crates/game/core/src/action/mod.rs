//! Actions entities perform on the world before behaviours tick.
//!
//! Actions are the glue between input and the behaviour engine: they read and
//! write [`EntityData`](crate::state::EntityData) directly and call
//! `attach`/`detach` on entities. Behaviour-level preconditions (such as
//! "the actor must hold a position") are checked here, never by behaviours.
//!
//! # Module Structure
//!
//! - `movement`: MoveAction (commit a new track position if free)
//! - `combat`: AttackAction (damage, hit marker, instrument spreading)
//! - `equipment`: GrabAction and SelectAction (instrument handling)
//! - `controls`: ControlMap from input symbols to actions

pub mod combat;
pub mod controls;
pub mod equipment;
pub mod movement;

pub use combat::{AttackAction, AttackError};
pub use controls::ControlMap;
pub use equipment::{GrabAction, GrabError, SelectAction, SelectError};
pub use movement::{MoveAction, MoveError};

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, World};

/// Defines how a concrete action variant mutates the world.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the world **before** mutation.
    fn pre_validate(&self, _actor: EntityId, _world: &World) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the world directly.
    fn apply(&self, actor: EntityId, world: &mut World) -> Result<(), Self::Error>;
}

/// Every action an entity can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Attack(AttackAction),
    Grab(GrabAction),
    Select(SelectAction),
    Wait,
}

impl Action {
    /// Returns the snake_case name of the action, used in logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack(_) => "attack",
            Action::Grab(_) => "grab",
            Action::Select(_) => "select",
            Action::Wait => "wait",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Self::Attack(action)
    }
}

impl From<GrabAction> for Action {
    fn from(action: GrabAction) -> Self {
        Self::Grab(action)
    }
}

impl From<SelectAction> for Action {
    fn from(action: SelectAction) -> Self {
        Self::Select(action)
    }
}

/// Failure to resolve the acting entity's track position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActorLookupError {
    #[error("actor {0} not found")]
    NotFound(EntityId),

    #[error("actor {0} must be positioned")]
    NotPositioned(EntityId),
}

impl GameError for ActorLookupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Internal,
            Self::NotPositioned(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ACTOR_NOT_FOUND",
            Self::NotPositioned(_) => "ACTOR_NOT_POSITIONED",
        }
    }
}

/// Position of `actor`, which must exist and be on the track.
pub(crate) fn actor_position(world: &World, actor: EntityId) -> Result<i32, ActorLookupError> {
    world
        .entity(actor)
        .ok_or(ActorLookupError::NotFound(actor))?
        .data()
        .position()
        .ok_or(ActorLookupError::NotPositioned(actor))
}

/// Slot `reach` ahead of `position`; `None` when it falls off the integer range.
pub(crate) fn slot_ahead(world: &World, position: i32) -> Option<i32> {
    position.checked_add(world.config().reach)
}
