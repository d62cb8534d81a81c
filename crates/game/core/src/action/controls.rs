use std::collections::BTreeMap;

use crate::action::{Action, AttackAction, GrabAction, MoveAction, SelectAction};
use crate::state::Input;

/// Binds input symbols to the actions an entity performs on them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ControlMap {
    bindings: BTreeMap<char, Action>,
}

impl ControlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock keyboard layout.
    ///
    /// | key | action |
    /// |-----|--------|
    /// | z / s | move up / down the track |
    /// | a | attack |
    /// | g | grab |
    /// | w | wait |
    /// | q / d | cycle held instruments backward / forward |
    pub fn keyboard() -> Self {
        Self::new()
            .bind('z', MoveAction::new(-1).into())
            .bind('s', MoveAction::new(1).into())
            .bind('a', AttackAction.into())
            .bind('g', GrabAction.into())
            .bind('w', Action::Wait)
            .bind('q', SelectAction::backward().into())
            .bind('d', SelectAction::forward().into())
    }

    pub fn bind(mut self, symbol: char, action: Action) -> Self {
        self.bindings.insert(symbol, action);
        self
    }

    pub fn get(&self, input: Input) -> Option<Action> {
        self.bindings.get(&input.symbol()).copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.bindings.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
