//! Per-entity attribute record shared by every behaviour of one entity.
//!
//! The key set is closed ([`DataKey`]) and every key is optional. Behaviours
//! only touch the keys their own contract names; reading a key another
//! behaviour was supposed to seed is the caller's precondition to check.

use strum::EnumIter;

/// Closed set of attribute keys an [`EntityData`] can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DataKey {
    Health,
    Attack,
    Position,
    DrawingLayers,
}

/// Sparse attribute record mutated in place by behaviours and actions.
///
/// `health` is never clamped and may go negative. `drawing_layers[0]` is the
/// base sprite when present; later entries are overlays in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityData {
    health: Option<f64>,
    attack: Option<f64>,
    position: Option<i32>,
    drawing_layers: Option<Vec<String>>,
}

impl EntityData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` currently holds a value.
    pub fn contains(&self, key: DataKey) -> bool {
        match key {
            DataKey::Health => self.health.is_some(),
            DataKey::Attack => self.attack.is_some(),
            DataKey::Position => self.position.is_some(),
            DataKey::DrawingLayers => self.drawing_layers.is_some(),
        }
    }

    /// Pops `key`, returning whether it was present.
    pub fn remove(&mut self, key: DataKey) -> bool {
        match key {
            DataKey::Health => self.health.take().is_some(),
            DataKey::Attack => self.attack.take().is_some(),
            DataKey::Position => self.position.take().is_some(),
            DataKey::DrawingLayers => self.drawing_layers.take().is_some(),
        }
    }

    /// Iterates the keys that currently hold a value.
    pub fn present_keys(&self) -> impl Iterator<Item = DataKey> + '_ {
        <DataKey as strum::IntoEnumIterator>::iter().filter(|key| self.contains(*key))
    }

    // ===== health =====

    pub fn health(&self) -> Option<f64> {
        self.health
    }

    pub fn set_health(&mut self, health: f64) {
        self.health = Some(health);
    }

    /// Inserts `health` only if the key is absent (first writer wins).
    pub fn seed_health(&mut self, health: f64) {
        self.health.get_or_insert(health);
    }

    /// Subtracts `amount` when the key is present; no-op otherwise.
    pub fn damage(&mut self, amount: f64) {
        if let Some(health) = self.health.as_mut() {
            *health -= amount;
        }
    }

    // ===== attack =====

    pub fn attack(&self) -> Option<f64> {
        self.attack
    }

    pub fn set_attack(&mut self, attack: f64) {
        self.attack = Some(attack);
    }

    // ===== position =====

    pub fn position(&self) -> Option<i32> {
        self.position
    }

    pub fn set_position(&mut self, position: i32) {
        self.position = Some(position);
    }

    pub fn seed_position(&mut self, position: i32) {
        self.position.get_or_insert(position);
    }

    // ===== drawing layers =====

    pub fn drawing_layers(&self) -> Option<&[String]> {
        self.drawing_layers.as_deref()
    }

    pub fn drawing_layers_mut(&mut self) -> Option<&mut Vec<String>> {
        self.drawing_layers.as_mut()
    }

    /// Starts the layer stack with `sprite` as base layer if no stack exists.
    pub fn seed_drawing_layers(&mut self, sprite: &str) {
        self.drawing_layers
            .get_or_insert_with(|| vec![sprite.to_owned()]);
    }

    /// Character count of the base sprite, if there is one.
    pub fn base_layer_width(&self) -> Option<usize> {
        self.drawing_layers
            .as_ref()?
            .first()
            .map(|layer| layer.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_keeps_first_writer() {
        let mut data = EntityData::new();
        data.seed_health(10.0);
        data.seed_health(3.0);
        data.seed_position(4);
        data.seed_position(1);

        assert_eq!(data.health(), Some(10.0));
        assert_eq!(data.position(), Some(4));
    }

    #[test]
    fn remove_reports_presence() {
        let mut data = EntityData::new();
        data.set_attack(2.0);

        assert!(data.remove(DataKey::Attack));
        assert!(!data.remove(DataKey::Attack));
        assert!(!data.contains(DataKey::Attack));
    }

    #[test]
    fn damage_without_health_is_a_no_op() {
        let mut data = EntityData::new();
        data.damage(1.0);
        assert_eq!(data.health(), None);

        data.set_health(0.5);
        data.damage(1.0);
        assert_eq!(data.health(), Some(-0.5));
    }

    #[test]
    fn present_keys_follow_declaration_order() {
        let mut data = EntityData::new();
        data.seed_drawing_layers("--o::::>");
        data.set_health(1.0);

        let keys: Vec<_> = data.present_keys().collect();
        assert_eq!(keys, vec![DataKey::Health, DataKey::DrawingLayers]);
        assert_eq!(DataKey::DrawingLayers.to_string(), "drawing_layers");
    }

    #[test]
    fn base_width_counts_characters() {
        let mut data = EntityData::new();
        assert_eq!(data.base_layer_width(), None);

        data.seed_drawing_layers("┌( ಠ_ಠ)┘");
        assert_eq!(data.base_layer_width(), Some(8));
    }
}
