//! Countdown status effects: Smoked, InFire, Wet, Hitted.
//!
//! Each one shows an overlay while active and expires once its remaining
//! duration would drop to zero. Renewals carry the cached overlay string so
//! `end` on the final instance removes exactly the layer the first `start`
//! pushed.

use super::overlay::{self, Effect, HIT_OVERLAY};
use super::{Behaviour, Lifecycle};
use crate::config::GameConfig;
use crate::state::{EntityData, Input};

/// Remaining duration after one tick, or `None` once it runs out.
fn countdown(duration: u32) -> Option<u32> {
    let remaining = duration.saturating_sub(1);
    (remaining > 0).then_some(remaining)
}

/// Lingering smoke. Chips away health each turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Smoked {
    duration: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    drawing: Option<String>,
}

impl Smoked {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            drawing: None,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn overlay(&self) -> Option<&str> {
        self.drawing.as_deref()
    }
}

impl Lifecycle for Smoked {
    const LAST: bool = false;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        overlay::show_effect(Effect::Smoked, &mut self.drawing, data);
    }

    fn end(&self, data: &mut EntityData) {
        overlay::hide_effect(&self.drawing, data);
    }

    fn step(&self, data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        data.damage(GameConfig::SMOKE_DAMAGE);
        countdown(self.duration).map(|duration| {
            Smoked {
                duration,
                drawing: self.drawing.clone(),
            }
            .into()
        })
    }
}

/// Burning. Spreads through instruments and is doused by water.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InFire {
    duration: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    drawing: Option<String>,
}

impl InFire {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            drawing: None,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn overlay(&self) -> Option<&str> {
        self.drawing.as_deref()
    }
}

impl Lifecycle for InFire {
    const LAST: bool = false;
    const TRANSITIVE: bool = true;

    fn start(&mut self, data: &mut EntityData) {
        overlay::show_effect(Effect::Fire, &mut self.drawing, data);
    }

    fn end(&self, data: &mut EntityData) {
        overlay::hide_effect(&self.drawing, data);
    }

    fn step(&self, data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        data.damage(GameConfig::FIRE_DAMAGE);
        countdown(self.duration).map(|duration| {
            InFire {
                duration,
                drawing: self.drawing.clone(),
            }
            .into()
        })
    }

    fn compose(&self, other: &Behaviour) -> Option<Behaviour> {
        match other {
            Behaviour::InFire(incoming) => {
                Some(InFire::new(self.duration + incoming.duration).into())
            }
            Behaviour::Wet(_) => Some(Smoked::new(GameConfig::DOUSED_FIRE_SMOKE_DURATION).into()),
            _ => None,
        }
    }
}

/// Soaked. Harmless by itself, turns incoming fire into smoke.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Wet {
    duration: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    drawing: Option<String>,
}

impl Wet {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            drawing: None,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn overlay(&self) -> Option<&str> {
        self.drawing.as_deref()
    }
}

impl Lifecycle for Wet {
    const LAST: bool = false;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        overlay::show_effect(Effect::Wet, &mut self.drawing, data);
    }

    fn end(&self, data: &mut EntityData) {
        overlay::hide_effect(&self.drawing, data);
    }

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        countdown(self.duration).map(|duration| {
            Wet {
                duration,
                drawing: self.drawing.clone(),
            }
            .into()
        })
    }

    fn compose(&self, other: &Behaviour) -> Option<Behaviour> {
        match other {
            Behaviour::Wet(incoming) => Some(Wet::new(self.duration + incoming.duration).into()),
            Behaviour::InFire(_) => Some(Smoked::new(self.duration.saturating_sub(1)).into()),
            _ => None,
        }
    }
}

/// Short-lived hit marker attached by attacks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hitted {
    duration: u32,
}

impl Hitted {
    pub fn new() -> Self {
        Self::with_duration(GameConfig::HIT_DURATION)
    }

    pub fn with_duration(duration: u32) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl Default for Hitted {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle for Hitted {
    const LAST: bool = false;
    const TRANSITIVE: bool = false;

    fn start(&mut self, data: &mut EntityData) {
        overlay::push_layer_once(data, HIT_OVERLAY);
    }

    fn end(&self, data: &mut EntityData) {
        overlay::remove_layer(data, HIT_OVERLAY);
    }

    fn step(&self, _data: &mut EntityData, _input: Input) -> Option<Behaviour> {
        countdown(self.duration).map(|duration| Hitted::with_duration(duration).into())
    }

    // A repeated hit restarts the marker instead of stacking it.
    fn compose(&self, other: &Behaviour) -> Option<Behaviour> {
        match other {
            Behaviour::Hitted(_) => Some(Hitted::new().into()),
            _ => None,
        }
    }
}
