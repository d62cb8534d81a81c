use tracing::debug;

use crate::action::{ActionTransition, ActorLookupError, actor_position, slot_ahead};
use crate::behaviour::{Behaviour, Hitted};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{DataKey, EntityId, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error(transparent)]
    Actor(#[from] ActorLookupError),

    #[error("target {0} disappeared during the attack")]
    TargetVanished(EntityId),
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Actor(error) => error.severity(),
            Self::TargetVanished(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Actor(error) => error.error_code(),
            Self::TargetVanished(_) => "ATTACK_TARGET_VANISHED",
        }
    }
}

/// Strikes whatever stands `reach` slots ahead of the actor.
///
/// Damage is the actor's attack plus the held instrument's attack. When the
/// instrument has an attack value its transitive behaviours (burning, for
/// instance) are attached to the target as well. Every landed strike attaches
/// a fresh [`Hitted`] marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction;

/// What a landed strike carries to its target.
struct Strike {
    damage: f64,
    spread: Vec<Behaviour>,
}

impl AttackAction {
    fn strike(actor: EntityId, target: EntityId, world: &World) -> Option<Strike> {
        let attacker = world.entity(actor)?;
        let mut damage = attacker.data().attack()?;
        if !world.entity(target)?.data().contains(DataKey::Health) {
            return None;
        }

        let mut spread = Vec::new();
        if let Some(instrument) = attacker.held().and_then(|id| world.entity(id)) {
            if let Some(bonus) = instrument.data().attack() {
                damage += bonus;
                spread = instrument.transitive_behaviours();
            }
        }
        Some(Strike { damage, spread })
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;

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
        let Some(Strike { damage, spread }) = Self::strike(actor, target, world) else {
            return Ok(());
        };

        let defender = world
            .entity_mut(target)
            .ok_or(AttackError::TargetVanished(target))?;
        for behaviour in spread {
            defender.attach(behaviour);
        }
        defender.attach(Hitted::new().into());
        defender.data_mut().damage(damage);

        debug!(
            target: "core::action",
            %actor,
            defender = %target,
            damage,
            health = ?defender.data().health(),
            "attack landed"
        );
        Ok(())
    }
}
