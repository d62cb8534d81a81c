use tracing::debug;

use crate::action::{ActionTransition, ActorLookupError, actor_position, slot_ahead};
use crate::behaviour::BehaviourKind;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrabError {
    #[error(transparent)]
    Actor(#[from] ActorLookupError),

    #[error("entity {0} disappeared while being grabbed")]
    TargetVanished(EntityId),
}

impl GameError for GrabError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Actor(error) => error.severity(),
            Self::TargetVanished(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Actor(error) => error.error_code(),
            Self::TargetVanished(_) => "GRAB_TARGET_VANISHED",
        }
    }
}

/// Picks up whatever stands `reach` slots ahead and holds it.
///
/// The grabbed entity loses its `Positioned` behaviour, leaving the track
/// while staying in the world (it keeps ticking).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrabAction;

impl ActionTransition for GrabAction {
    type Error = GrabError;

    fn pre_validate(&self, actor: EntityId, world: &World) -> Result<(), Self::Error> {
        actor_position(world, actor)?;
        Ok(())
    }

    fn apply(&self, actor: EntityId, world: &mut World) -> Result<(), Self::Error> {
        let position = actor_position(world, actor)?;
        let Some(target) = slot_ahead(world, position).and_then(|slot| world.entity_at(slot))
        else {
            return Ok(());
        };
        if target == actor {
            return Ok(());
        }

        world
            .entity_mut(target)
            .ok_or(GrabError::TargetVanished(target))?
            .detach(BehaviourKind::Positioned);
        world
            .entity_mut(actor)
            .ok_or(ActorLookupError::NotFound(actor))?
            .attached_mut()
            .push(target);

        debug!(target: "core::action", %actor, instrument = %target, "instrument grabbed");
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    Actor(#[from] ActorLookupError),
}

impl GameError for SelectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Actor(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Actor(error) => error.error_code(),
        }
    }
}

/// Cycles the held instruments so a different one comes first.
///
/// Forward moves the first instrument to the back; backward brings the last
/// one to the front. Fewer than two instruments: nothing to cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectAction {
    pub forward: bool,
}

impl SelectAction {
    pub fn forward() -> Self {
        Self { forward: true }
    }

    pub fn backward() -> Self {
        Self { forward: false }
    }
}

impl ActionTransition for SelectAction {
    type Error = SelectError;

    fn apply(&self, actor: EntityId, world: &mut World) -> Result<(), Self::Error> {
        let attached = world
            .entity_mut(actor)
            .ok_or(ActorLookupError::NotFound(actor))?
            .attached_mut();
        if attached.len() > 1 {
            if self.forward {
                attached.rotate_left(1);
            } else {
                attached.rotate_right(1);
            }
        }
        Ok(())
    }
}
