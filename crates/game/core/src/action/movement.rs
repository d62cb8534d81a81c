use crate::action::{ActionTransition, ActorLookupError, actor_position};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Actor(#[from] ActorLookupError),

    #[error("destination {destination} is outside the track")]
    OutOfTrack { destination: i32 },

    #[error("moving {step} from {position} leaves the coordinate range")]
    TrackOverflow { position: i32, step: i32 },

    #[error("destination {destination} is occupied by {occupant}")]
    Occupied { destination: i32, occupant: EntityId },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Actor(error) => error.severity(),
            Self::OutOfTrack { .. } | Self::TrackOverflow { .. } | Self::Occupied { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Actor(error) => error.error_code(),
            Self::OutOfTrack { .. } => "MOVE_OUT_OF_TRACK",
            Self::TrackOverflow { .. } => "MOVE_TRACK_OVERFLOW",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
        }
    }
}

/// Shifts the actor along the track by `step` slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub step: i32,
}

impl MoveAction {
    pub fn new(step: i32) -> Self {
        Self { step }
    }

    fn destination(&self, actor: EntityId, world: &World) -> Result<i32, MoveError> {
        let position = actor_position(world, actor)?;
        position
            .checked_add(self.step)
            .ok_or(MoveError::TrackOverflow {
                position,
                step: self.step,
            })
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, actor: EntityId, world: &World) -> Result<(), Self::Error> {
        let destination = self.destination(actor, world)?;
        if !world.config().is_on_track(destination) {
            return Err(MoveError::OutOfTrack { destination });
        }
        if let Some(occupant) = world.entity_at(destination) {
            return Err(MoveError::Occupied {
                destination,
                occupant,
            });
        }
        Ok(())
    }

    fn apply(&self, actor: EntityId, world: &mut World) -> Result<(), Self::Error> {
        let destination = self.destination(actor, world)?;
        world
            .entity_mut(actor)
            .ok_or(ActorLookupError::NotFound(actor))?
            .data_mut()
            .set_position(destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::{Drawable, Positioned};
    use crate::config::GameConfig;

    fn world_with(positions: &[i32]) -> (World, Vec<EntityId>) {
        let mut world = World::new(GameConfig::default());
        let ids = positions
            .iter()
            .map(|p| world.spawn("rock", [Positioned::new(*p).into()]))
            .collect();
        (world, ids)
    }

    fn run(action: MoveAction, actor: EntityId, world: &mut World) -> Result<(), MoveError> {
        action.pre_validate(actor, world)?;
        action.apply(actor, world)
    }

    #[test]
    fn moves_into_free_slot() {
        let (mut world, ids) = world_with(&[0, 4]);

        run(MoveAction::new(1), ids[0], &mut world).unwrap();

        assert_eq!(world.entity(ids[0]).unwrap().data().position(), Some(1));
    }

    #[test]
    fn occupied_slot_leaves_position_unchanged() {
        let (mut world, ids) = world_with(&[0, 1]);

        let result = run(MoveAction::new(1), ids[0], &mut world);

        assert_eq!(
            result,
            Err(MoveError::Occupied {
                destination: 1,
                occupant: ids[1],
            })
        );
        assert_eq!(world.entity(ids[0]).unwrap().data().position(), Some(0));
    }

    #[test]
    fn cannot_leave_the_start_of_the_track() {
        let (mut world, ids) = world_with(&[0]);

        let result = run(MoveAction::new(-1), ids[0], &mut world);

        assert_eq!(result, Err(MoveError::OutOfTrack { destination: -1 }));
        assert!(result.unwrap_err().severity().is_recoverable());
    }

    #[test]
    fn cannot_pass_the_end_of_the_track() {
        let end = GameConfig::DEFAULT_MAX_POSITION;
        let (mut world, ids) = world_with(&[end]);

        let result = run(MoveAction::new(1), ids[0], &mut world);

        assert_eq!(result, Err(MoveError::OutOfTrack { destination: end + 1 }));
        assert_eq!(world.entity(ids[0]).unwrap().data().position(), Some(end));
    }

    #[test]
    fn step_past_integer_range_is_rejected() {
        let (mut world, ids) = world_with(&[i32::MAX]);

        let result = run(MoveAction::new(1), ids[0], &mut world);

        assert_eq!(
            result,
            Err(MoveError::TrackOverflow {
                position: i32::MAX,
                step: 1,
            })
        );
        assert!(result.unwrap_err().severity().is_recoverable());
        assert_eq!(world.entity(ids[0]).unwrap().data().position(), Some(i32::MAX));
    }

    #[test]
    fn unpositioned_actor_is_rejected() {
        let mut world = World::new(GameConfig::default());
        let ghost = world.spawn("ghost", [Drawable::new("        ").into()]);

        let result = run(MoveAction::new(1), ghost, &mut world);

        assert_eq!(
            result,
            Err(MoveError::Actor(ActorLookupError::NotPositioned(ghost)))
        );
        assert_eq!(result.unwrap_err().severity(), ErrorSeverity::Validation);
    }
}
