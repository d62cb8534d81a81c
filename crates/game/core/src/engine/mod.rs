//! Turn driver and action execution pipeline.
//!
//! The [`GameEngine`] is the only place a full turn is assembled: controlled
//! entities act on the input first, then every entity's behaviours tick, then
//! the dead are buried.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use tracing::{debug, error, warn};

use crate::action::Action;
use crate::error::GameError;
use crate::state::{EntityId, Input, Tick, World};

/// Everything that happened during one [`GameEngine::run_turn`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn counter after the turn completed.
    pub turn: Tick,
    /// Actions that were rejected or failed, in execution order.
    pub failures: Vec<(EntityId, ExecuteError)>,
    /// Entities moved to the cemetery this turn.
    pub buried: Vec<EntityId>,
}

impl TurnReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct GameEngine<'a> {
    world: &'a mut World,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World) -> Self {
        Self { world }
    }

    /// Executes a single action for `actor` through the transition pipeline.
    pub fn execute(&mut self, actor: EntityId, action: &Action) -> Result<(), ExecuteError> {
        transition::execute_transition(action, actor, self.world)
    }

    /// Runs one full turn driven by `input`.
    ///
    /// Action failures never abort the turn; they are logged and reported.
    pub fn run_turn(&mut self, input: Input) -> TurnReport {
        let mut failures = Vec::new();

        for (actor, action) in self.bound_actions(input) {
            debug!(
                target: "core::engine",
                %actor,
                action = action.as_snake_case(),
                "executing action"
            );
            if let Err(error) = self.execute(actor, &action) {
                let severity = error.severity();
                if severity.is_internal() {
                    error!(
                        target: "core::engine",
                        %actor,
                        action = action.as_snake_case(),
                        phase = error.phase().as_str(),
                        code = error.error_code(),
                        %error,
                        "action hit an inconsistent world"
                    );
                } else {
                    warn!(
                        target: "core::engine",
                        %actor,
                        action = action.as_snake_case(),
                        phase = error.phase().as_str(),
                        code = error.error_code(),
                        severity = severity.as_str(),
                        %error,
                        "action failed"
                    );
                }
                failures.push((actor, error));
            }
        }

        self.world.update_all(input);
        let buried = self.world.bury_dead();
        let turn = self.world.advance_turn();

        TurnReport {
            turn,
            failures,
            buried,
        }
    }

    /// Actions bound to `input`, snapshotted in world order before any runs.
    fn bound_actions(&self, input: Input) -> Vec<(EntityId, Action)> {
        self.world
            .entities()
            .iter()
            .filter_map(|entity| {
                let action = entity.controls()?.get(input)?;
                Some((entity.id(), action))
            })
            .collect()
    }
}
