use crate::data::model::HappinessDataset;
use crate::router::Tab;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once at startup and never replaced; the only thing
/// that changes between frames is which tab is selected.
pub struct AppState {
    /// The immutable record table, lifecycle = process startup to shutdown.
    pub dataset: HappinessDataset,

    /// Currently selected tab.
    pub active_tab: Tab,
}

impl AppState {
    pub fn new(dataset: HappinessDataset) -> Self {
        Self {
            dataset,
            active_tab: Tab::default(),
        }
    }

    /// Handle a tab selection event.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
