use std::fmt;

/// Unique identifier for any entity tracked in the world.
///
/// Ids are allocated sequentially by [`World::spawn`](super::World::spawn)
/// and never reused, including for entities moved to the cemetery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete turn counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The symbol the driver received for the current turn.
///
/// Every behaviour's `step` receives it; the stock behaviours ignore it but
/// the contract keeps it so input-reactive behaviours can be added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Input(pub char);

impl Input {
    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Input {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
