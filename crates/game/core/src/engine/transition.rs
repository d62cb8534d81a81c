//! Action transition dispatch.

use crate::action::{Action, ActionTransition};
use crate::state::{EntityId, World};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

macro_rules! dispatch_transition {
    ($action:expr, $actor:expr, $world:expr, { $($variant:ident),+ $(,)? }) => {{
        match $action {
            $(
                Action::$variant(transition) => {
                    drive_transition(transition, $actor, $world).map_err(ExecuteError::$variant)
                }
            )+
            Action::Wait => Ok(()),
        }
    }};
}

/// Runs `pre_validate` then `apply`. A failed pre-validation leaves the
/// world untouched.
#[inline]
fn drive_transition<T>(transition: &T, actor: EntityId, world: &mut World) -> TransitionResult<T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(actor, world)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(actor, world)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))
}

pub(super) fn execute_transition(
    action: &Action,
    actor: EntityId,
    world: &mut World,
) -> Result<(), ExecuteError> {
    dispatch_transition!(action, actor, world, { Move, Attack, Grab, Select })
}
