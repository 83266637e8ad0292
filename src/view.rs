//! View state controller.
//!
//! Owns the extension store, the current filter mode, the derived list of
//! displayed records and the theme. Every mutation goes through here and is
//! followed by a full re-derivation of the displayed list.

use tracing::{debug, info};

use crate::extension::{ExtensionId, ExtensionRecord};
use crate::filter::{derive_view, FilterCounts, FilterMode};
use crate::prefs::ThemePreference;
use crate::store::ExtensionStore;
use crate::theme::Theme;

/// What the renderer sees and the events it feeds back.
pub struct ViewController {
    store: ExtensionStore,
    filter_mode: FilterMode,
    displayed: Vec<ExtensionRecord>,
    theme: Theme,
    prefs: ThemePreference,
}

impl ViewController {
    /// Create a controller over `store`, loading the theme from `prefs`.
    pub fn new(store: ExtensionStore, filter_mode: FilterMode, prefs: ThemePreference) -> Self {
        let theme = Theme::from_flag(prefs.load());
        let displayed = derive_view(store.records(), filter_mode);
        info!(
            records = store.len(),
            filter = %filter_mode,
            theme = %theme,
            "View initialized"
        );
        Self {
            store,
            filter_mode,
            displayed,
            theme,
            prefs,
        }
    }

    /// Seeded store, `All` filter and in-memory preferences.
    pub fn with_seed() -> Self {
        Self::new(
            ExtensionStore::seeded(),
            FilterMode::All,
            ThemePreference::in_memory(),
        )
    }

    pub fn store(&self) -> &ExtensionStore {
        &self.store
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn displayed(&self) -> &[ExtensionRecord] {
        &self.displayed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn counts(&self) -> FilterCounts {
        self.store.counts()
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        self.refresh();
    }

    pub fn on_toggle(&mut self, id: ExtensionId) {
        if !self.store.toggle(id) {
            debug!(%id, "Toggle ignored, no such extension");
        }
        self.refresh();
    }

    pub fn on_remove(&mut self, id: ExtensionId) {
        if !self.store.remove(id) {
            debug!(%id, "Remove ignored, no such extension");
        }
        self.refresh();
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.prefs.save(self.theme.is_dark());
        info!(theme = %self.theme, "Theme changed");
        self.theme
    }

    fn refresh(&mut self) {
        self.displayed = derive_view(self.store.records(), self.filter_mode);
    }
}
