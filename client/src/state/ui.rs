//! Local UI chrome state (active analysis view, sidebar expansion).
//!
//! DESIGN
//! ======
//! The sidebar never owns these values. The page holds a `RwSignal<UiState>`
//! and applies the transitions below when the sidebar asks for them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which analysis view occupies the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSelection {
    /// Price history for a single ticker.
    #[default]
    Stock,
    /// Hedge relationship between two tickers.
    Hedge,
}

impl ViewSelection {
    /// Every view, in sidebar order.
    pub const ALL: [ViewSelection; 2] = [ViewSelection::Stock, ViewSelection::Hedge];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Hedge => "hedge",
        }
    }

    /// Caption shown on the navigation entry and page heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stock => "Stock Data",
            Self::Hedge => "Hedge Analysis",
        }
    }

    /// Parse a canonical name. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == raw)
    }
}

/// UI state for the analysis page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_view: ViewSelection,
    pub sidebar_open: bool,
}

impl UiState {
    pub fn select_view(&mut self, view: ViewSelection) {
        self.active_view = view;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
