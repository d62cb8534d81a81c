//! Behaviour composition engine and the turn rules built on top of it.
//!
//! An [`Entity`] owns an [`EntityData`] record and an ordered list of
//! [`Behaviour`]s. Behaviours claim data keys when started, release them when
//! ended, advance one tick at a time and may merge with an incoming behaviour
//! into a third one. [`World`] orders entities, and [`engine::GameEngine`]
//! assembles a full turn from input-bound actions, behaviour ticks and burial.
pub mod action;
pub mod behaviour;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionTransition, ActorLookupError, AttackAction, AttackError, ControlMap, GrabAction,
    GrabError, MoveAction, MoveError, SelectAction, SelectError,
};
pub use behaviour::{
    Alive, Attacker, Behaviour, BehaviourKind, Dead, Drawable, Effect, Hitted, InFire, Lifecycle,
    Positioned, Smoked, Wet,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, TurnReport};
pub use entity::{AttachOutcome, Entity};
pub use error::{ErrorSeverity, GameError};
pub use state::{DataKey, EntityData, EntityId, Input, Tick, World};
