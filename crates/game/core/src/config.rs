/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Distance from the actor to the track slot targeted by attack and grab.
    pub reach: i32,
    /// Lowest track coordinate a move may commit to.
    pub min_position: i32,
    /// Highest track coordinate a move may commit to and the text view draws.
    pub max_position: i32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Turns a fresh hit marker stays visible.
    pub const HIT_DURATION: u32 = 2;
    /// Duration of the smoke produced when water lands on a burning entity.
    pub const DOUSED_FIRE_SMOKE_DURATION: u32 = 3;
    /// Health lost per turn while burning.
    pub const FIRE_DAMAGE: f64 = 1.0;
    /// Health lost per turn while smoked.
    pub const SMOKE_DAMAGE: f64 = 0.5;
    /// Character width of a sprite layer; blank cells in the text view use it.
    pub const SPRITE_WIDTH: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REACH: i32 = 1;
    pub const DEFAULT_MIN_POSITION: i32 = 0;
    pub const DEFAULT_MAX_POSITION: i32 = 255;

    pub fn new() -> Self {
        Self {
            reach: Self::DEFAULT_REACH,
            min_position: Self::DEFAULT_MIN_POSITION,
            max_position: Self::DEFAULT_MAX_POSITION,
        }
    }

    pub fn with_reach(reach: i32) -> Self {
        Self {
            reach,
            ..Self::new()
        }
    }

    /// True when `position` lies within `min_position..=max_position`.
    pub fn is_on_track(&self, position: i32) -> bool {
        (self.min_position..=self.max_position).contains(&position)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
