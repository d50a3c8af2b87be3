//! Detail modal tabs and the tab-selection state machine

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the four mutually exclusive content regions of the detail modal
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModalTab {
    #[default]
    About,
    BaseStats,
    Evolution,
    Moves,
}

impl ModalTab {
    /// Tab bar order
    pub const ALL: [ModalTab; 4] = [
        ModalTab::About,
        ModalTab::BaseStats,
        ModalTab::Evolution,
        ModalTab::Moves,
    ];

    /// Stable identifier, also used for panel module file names
    pub fn id(self) -> &'static str {
        match self {
            ModalTab::About => "about",
            ModalTab::BaseStats => "base-stats",
            ModalTab::Evolution => "evolution",
            ModalTab::Moves => "moves",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModalTab::About => "About",
            ModalTab::BaseStats => "Base Stats",
            ModalTab::Evolution => "Evolution",
            ModalTab::Moves => "Moves",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn index(self) -> usize {
        match self {
            ModalTab::About => 0,
            ModalTab::BaseStats => 1,
            ModalTab::Evolution => 2,
            ModalTab::Moves => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Step through the tab bar, wrapping at both ends
    pub fn cycle(self, step: i16) -> Self {
        let len = Self::ALL.len() as i16;
        let next = (self.index() as i16 + step).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for ModalTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Selected tab of a mounted modal.
///
/// Owned by the modal component; dropped (reset) when the modal unmounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabState {
    current: ModalTab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ModalTab {
        self.current
    }

    /// Replace the current tab unconditionally. Returns whether it changed.
    pub fn select(&mut self, tab: ModalTab) -> bool {
        let changed = self.current != tab;
        self.current = tab;
        changed
    }

    /// Select by string id; unknown ids leave the state untouched
    pub fn select_id(&mut self, id: &str) -> Option<ModalTab> {
        let tab = ModalTab::from_id(id)?;
        self.select(tab);
        Some(tab)
    }

    pub fn cycle(&mut self, step: i16) -> ModalTab {
        self.current = self.current.cycle(step);
        self.current
    }

    pub fn reset(&mut self) {
        self.current = ModalTab::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_about() {
        assert_eq!(TabState::new().current(), ModalTab::About);
    }

    #[test]
    fn test_ids_round_trip() {
        for tab in ModalTab::ALL {
            assert_eq!(ModalTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(ModalTab::from_id("base-stats"), Some(ModalTab::BaseStats));
        assert_eq!(ModalTab::from_id("stats"), None);
    }

    #[test]
    fn test_select_replaces_unconditionally() {
        let mut tabs = TabState::new();
        assert!(tabs.select(ModalTab::Moves));
        assert!(!tabs.select(ModalTab::Moves));
        assert!(tabs.select(ModalTab::About));
        assert_eq!(tabs.current(), ModalTab::About);
    }

    #[test]
    fn test_unknown_id_leaves_state() {
        let mut tabs = TabState::new();
        tabs.select(ModalTab::Evolution);
        assert_eq!(tabs.select_id("favourites"), None);
        assert_eq!(tabs.current(), ModalTab::Evolution);
        assert_eq!(tabs.select_id("moves"), Some(ModalTab::Moves));
        assert_eq!(tabs.current(), ModalTab::Moves);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(ModalTab::About.cycle(-1), ModalTab::Moves);
        assert_eq!(ModalTab::Moves.cycle(1), ModalTab::About);
        assert_eq!(ModalTab::BaseStats.cycle(2), ModalTab::Moves);
    }

    #[test]
    fn test_reset_returns_to_about() {
        let mut tabs = TabState::new();
        tabs.cycle(1);
        assert_eq!(tabs.current(), ModalTab::BaseStats);
        tabs.reset();
        assert_eq!(tabs.current(), ModalTab::About);
    }
}
