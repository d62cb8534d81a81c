//! Composable behaviours attached to entities.
//!
//! A behaviour is a unit of status or ability logic with four operations
//! over the owning entity's [`EntityData`]:
//!
//! - `start`: apply the initial effect (idempotent: shared keys are seeded
//!   only when absent)
//! - `end`: retract exactly what `start` introduced
//! - `step`: advance one tick, returning the replacement value or `None` on
//!   expiry
//! - `compose`: merge with an incoming behaviour, or refuse
//!
//! `compose` is directional. The entity only ever evaluates
//! `existing.compose(incoming)`, and the rule table gives different results
//! depending on which side initiates (`InFire ← Wet` yields `Smoked(3)`,
//! `Wet ← InFire` yields `Smoked(wet - 1)`).
//!
//! # Module Structure
//!
//! - `base`: Drawable, Positioned, Attacker
//! - `vital`: Alive, Dead
//! - `status`: Smoked, InFire, Wet, Hitted
//! - `overlay`: drawing-layer helpers shared by the status behaviours

mod base;
pub mod overlay;
mod status;
mod vital;

pub use base::{Attacker, Drawable, Positioned};
pub use overlay::{Effect, HIT_OVERLAY};
pub use status::{Hitted, InFire, Smoked, Wet};
pub use vital::{Alive, Dead};

use strum::EnumDiscriminants;

use crate::state::{EntityData, Input};

/// Contract every behaviour variant implements.
///
/// # Implementation Rules
/// 1. `start` must be safe to call on an entity that already shows the effect
/// 2. `end` must never remove another behaviour's contribution
/// 3. `step` returns the value this behaviour becomes next tick; returning a
///    copy with updated parameters is the common case
pub trait Lifecycle {
    /// Ordered after every non-`LAST` behaviour when the entity re-sorts.
    const LAST: bool;

    /// Copied onto the target when the owner is used as an instrument.
    const TRANSITIVE: bool;

    fn start(&mut self, data: &mut EntityData);

    fn end(&self, data: &mut EntityData);

    fn step(&self, data: &mut EntityData, input: Input) -> Option<Behaviour>;

    /// Combines `self` (already attached) with `other` (incoming).
    fn compose(&self, _other: &Behaviour) -> Option<Behaviour> {
        None
    }
}

/// Closed set of behaviour variants.
#[derive(Clone, Debug, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(BehaviourKind))]
#[strum_discriminants(derive(Hash, strum::Display, strum::EnumIter))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behaviour {
    Drawable(Drawable),
    Positioned(Positioned),
    Alive(Alive),
    Attacker(Attacker),
    Dead(Dead),
    Smoked(Smoked),
    InFire(InFire),
    Wet(Wet),
    Hitted(Hitted),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Behaviour::Drawable($inner) => $body,
            Behaviour::Positioned($inner) => $body,
            Behaviour::Alive($inner) => $body,
            Behaviour::Attacker($inner) => $body,
            Behaviour::Dead($inner) => $body,
            Behaviour::Smoked($inner) => $body,
            Behaviour::InFire($inner) => $body,
            Behaviour::Wet($inner) => $body,
            Behaviour::Hitted($inner) => $body,
        }
    };
}

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Behaviour {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(
    Drawable, Positioned, Alive, Attacker, Dead, Smoked, InFire, Wet, Hitted,
);

fn last_of<T: Lifecycle>(_: &T) -> bool {
    T::LAST
}

fn transitive_of<T: Lifecycle>(_: &T) -> bool {
    T::TRANSITIVE
}

impl Behaviour {
    pub fn kind(&self) -> BehaviourKind {
        self.into()
    }

    pub fn is_last(&self) -> bool {
        dispatch!(self, inner => last_of(inner))
    }

    pub fn is_transitive(&self) -> bool {
        dispatch!(self, inner => transitive_of(inner))
    }

    pub fn start(&mut self, data: &mut EntityData) {
        dispatch!(self, inner => inner.start(data))
    }

    pub fn end(&self, data: &mut EntityData) {
        dispatch!(self, inner => inner.end(data))
    }

    pub fn step(&self, data: &mut EntityData, input: Input) -> Option<Behaviour> {
        dispatch!(self, inner => inner.step(data, input))
    }

    pub fn compose(&self, other: &Behaviour) -> Option<Behaviour> {
        dispatch!(self, inner => inner.compose(other))
    }

    /// Remaining turns for countdown behaviours.
    pub fn duration(&self) -> Option<u32> {
        match self {
            Behaviour::Smoked(smoked) => Some(smoked.duration()),
            Behaviour::InFire(fire) => Some(fire.duration()),
            Behaviour::Wet(wet) => Some(wet.duration()),
            Behaviour::Hitted(hit) => Some(hit.duration()),
            Behaviour::Drawable(_)
            | Behaviour::Positioned(_)
            | Behaviour::Alive(_)
            | Behaviour::Attacker(_)
            | Behaviour::Dead(_) => None,
        }
    }

    /// Overlay string cached by the last `start`, if any.
    pub fn overlay(&self) -> Option<&str> {
        match self {
            Behaviour::Smoked(smoked) => smoked.overlay(),
            Behaviour::InFire(fire) => fire.overlay(),
            Behaviour::Wet(wet) => wet.overlay(),
            Behaviour::Hitted(_) => Some(HIT_OVERLAY),
            Behaviour::Drawable(_)
            | Behaviour::Positioned(_)
            | Behaviour::Alive(_)
            | Behaviour::Attacker(_)
            | Behaviour::Dead(_) => None,
        }
    }

    /// Copy of this behaviour for attaching to another entity.
    ///
    /// The cached overlay is dropped so the copy sizes its overlay against
    /// the receiving entity's base sprite.
    pub fn transferred(&self) -> Behaviour {
        match self {
            Behaviour::Smoked(smoked) => Smoked::new(smoked.duration()).into(),
            Behaviour::InFire(fire) => InFire::new(fire.duration()).into(),
            Behaviour::Wet(wet) => Wet::new(wet.duration()).into(),
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(sprite: &str) -> EntityData {
        let mut data = EntityData::new();
        data.seed_drawing_layers(sprite);
        data
    }

    #[test]
    fn scheduling_flags_follow_rule_table() {
        let cases: [(Behaviour, bool, bool); 9] = [
            (Drawable::new("--o::::>").into(), true, false),
            (Positioned::new(0).into(), false, false),
            (Alive::new(1.0).into(), true, false),
            (Attacker::new(1.0).into(), true, false),
            (Dead::new(1.0).into(), true, false),
            (Smoked::new(1).into(), false, false),
            (InFire::new(1).into(), false, true),
            (Wet::new(1).into(), false, false),
            (Hitted::new().into(), false, false),
        ];

        for (behaviour, last, transitive) in cases {
            assert_eq!(behaviour.is_last(), last, "{}", behaviour.kind());
            assert_eq!(behaviour.is_transitive(), transitive, "{}", behaviour.kind());
        }
    }

    #[test]
    fn same_kind_merges_sum_durations() {
        let fire = Behaviour::from(InFire::new(5));
        let merged = fire.compose(&InFire::new(3).into()).unwrap();
        assert_eq!(merged.kind(), BehaviourKind::InFire);
        assert_eq!(merged.duration(), Some(8));

        let wet = Behaviour::from(Wet::new(4));
        let merged = wet.compose(&Wet::new(4).into()).unwrap();
        assert_eq!(merged.kind(), BehaviourKind::Wet);
        assert_eq!(merged.duration(), Some(8));
    }

    #[test]
    fn fire_and_water_merge_asymmetrically() {
        let fire_first = Behaviour::from(InFire::new(5))
            .compose(&Wet::new(2).into())
            .unwrap();
        assert_eq!(fire_first.kind(), BehaviourKind::Smoked);
        assert_eq!(fire_first.duration(), Some(3));

        let water_first = Behaviour::from(Wet::new(5))
            .compose(&InFire::new(2).into())
            .unwrap();
        assert_eq!(water_first.kind(), BehaviourKind::Smoked);
        assert_eq!(water_first.duration(), Some(4));
    }

    #[test]
    fn hits_merge_into_a_fresh_hit() {
        let worn = Behaviour::from(Hitted::with_duration(1));
        let merged = worn.compose(&Hitted::with_duration(1).into()).unwrap();
        assert_eq!(merged.duration(), Some(2));
    }

    #[test]
    fn unrelated_kinds_do_not_merge() {
        let smoked = Behaviour::from(Smoked::new(2));
        assert!(smoked.compose(&Smoked::new(2).into()).is_none());
        assert!(smoked.compose(&InFire::new(2).into()).is_none());

        let alive = Behaviour::from(Alive::new(3.0));
        assert!(alive.compose(&Alive::new(3.0).into()).is_none());

        let hit = Behaviour::from(Hitted::new());
        assert!(hit.compose(&Wet::new(1).into()).is_none());
    }

    #[test]
    fn transferred_copy_drops_cached_overlay() {
        let mut data = drawn("--o::::>");
        let mut fire = Behaviour::from(InFire::new(4));
        fire.start(&mut data);
        assert_eq!(fire.overlay(), Some("********"));

        let copy = fire.transferred();
        assert_eq!(copy.overlay(), None);
        assert_eq!(copy.duration(), Some(4));
    }

    #[test]
    fn smoked_expires_and_removes_overlay() {
        let mut data = drawn("--o::::>");
        data.set_health(2.0);
        let mut smoked = Behaviour::from(Smoked::new(1));
        smoked.start(&mut data);
        assert_eq!(data.drawing_layers().map(<[String]>::len), Some(2));

        let next = smoked.step(&mut data, Input('w'));
        assert!(next.is_none());
        smoked.end(&mut data);

        assert_eq!(data.health(), Some(1.5));
        assert_eq!(data.drawing_layers(), Some(&["--o::::>".to_owned()][..]));
    }
}
