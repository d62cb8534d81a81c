//! Overlay layers pushed onto an entity's drawing stack by status behaviours.
//!
//! Overlays are matched and removed by string value, not by identity: a
//! behaviour removes the first layer equal to the string it cached at
//! `start`. Two behaviours producing the same string (or an overlay equal to
//! the base sprite) can therefore remove each other's layer.

use crate::state::EntityData;

/// Fixed overlay pushed by [`Hitted`](super::Hitted).
pub const HIT_OVERLAY: &str = "  H I T  ";

/// Glyph families for overlays sized to the base sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Effect {
    Fire,
    Wet,
    Smoked,
}

impl Effect {
    pub const fn glyph(self) -> char {
        match self {
            Effect::Fire => '*',
            Effect::Wet => 'o',
            Effect::Smoked => '#',
        }
    }

    /// The glyph repeated `width` times.
    pub fn fill(self, width: usize) -> String {
        std::iter::repeat_n(self.glyph(), width).collect()
    }
}

/// Computes the overlay on first use and pushes it if not already shown.
///
/// Nothing is cached while the entity has no base sprite, so a later `start`
/// on a drawable entity still sizes the overlay correctly.
pub(crate) fn show_effect(effect: Effect, cache: &mut Option<String>, data: &mut EntityData) {
    if cache.is_none() {
        let Some(width) = data.base_layer_width() else {
            return;
        };
        *cache = Some(effect.fill(width));
    }
    if let Some(layer) = cache.as_deref() {
        push_layer_once(data, layer);
    }
}

pub(crate) fn hide_effect(cache: &Option<String>, data: &mut EntityData) {
    if let Some(layer) = cache.as_deref() {
        remove_layer(data, layer);
    }
}

pub(crate) fn push_layer_once(data: &mut EntityData, layer: &str) {
    if let Some(layers) = data.drawing_layers_mut() {
        if !layers.iter().any(|existing| existing == layer) {
            layers.push(layer.to_owned());
        }
    }
}

/// Removes the first layer equal to `layer`.
pub(crate) fn remove_layer(data: &mut EntityData, layer: &str) {
    if let Some(layers) = data.drawing_layers_mut() {
        if let Some(index) = layers.iter().position(|existing| existing == layer) {
            layers.remove(index);
        }
    }
}
