/// Transient UI state and its transition rules
///
/// All per-session view state lives in one struct, mutated only through
/// the methods below so every transition can be unit tested without a
/// rendering harness. The struct is rebuilt fresh on every launch; the
/// theme preference is the only value that outlives the session, and it
/// is rehydrated through `state::prefs`.

use serde::{Deserialize, Serialize};

use super::catalog::{Asset, Category};

/// Window width below which the layout collapses to the compact
/// (drawer-based) navigation.
pub const COMPACT_BREAKPOINT: f32 = 760.0;

/// The persisted binary theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    /// The other choice
    pub fn flipped(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

/// One-shot lifecycle of the persisted theme preference.
///
/// The app starts `Unresolved` and renders a neutral default until the
/// stored preference has been read once. Modeling this as an explicit
/// state (rather than a mount flag) makes "no flash of the wrong theme"
/// a testable precondition: the toggle refuses to act while unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeLifecycle {
    #[default]
    Unresolved,
    Resolved(ThemeChoice),
}

impl ThemeLifecycle {
    /// The effective choice: the neutral default while unresolved.
    pub fn effective(self) -> ThemeChoice {
        match self {
            ThemeLifecycle::Unresolved => ThemeChoice::default(),
            ThemeLifecycle::Resolved(choice) => choice,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, ThemeLifecycle::Resolved(_))
    }
}

/// The complete set of transient UI flags and selections for the session
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Current search text, applied live on every keystroke
    pub search: String,
    /// Active category filter; `None` means "all"
    pub active_category: Option<Category>,
    /// Asset shown in the detail modal
    pub selected: Option<&'static Asset>,
    /// Whether the detail modal is up
    pub modal_open: bool,
    /// Whether the compact-layout navigation drawer is up
    pub mobile_menu_open: bool,
    /// Theme preference lifecycle, resolved once at startup
    pub theme: ThemeLifecycle,
    /// Last known window width, for the responsive breakpoint
    pub window_width: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            active_category: None,
            selected: None,
            modal_open: false,
            mobile_menu_open: false,
            theme: ThemeLifecycle::Unresolved,
            window_width: 1280.0,
        }
    }
}

impl ViewState {
    /// Replace the search text
    pub fn set_search(&mut self, query: String) {
        self.search = query;
    }

    /// Toggle a category pill: selecting the active category clears the
    /// filter, selecting another replaces it. At most one is active.
    pub fn toggle_category(&mut self, category: Category) {
        if self.active_category == Some(category) {
            self.active_category = None;
        } else {
            self.active_category = Some(category);
        }
    }

    /// Open the detail modal for an asset
    pub fn open_asset(&mut self, asset: &'static Asset) {
        self.selected = Some(asset);
        self.modal_open = true;
    }

    /// Close the detail modal. No-op when already closed.
    pub fn dismiss_modal(&mut self) {
        self.selected = None;
        self.modal_open = false;
    }

    pub fn open_menu(&mut self) {
        self.mobile_menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Record the stored preference, ending the unresolved phase.
    pub fn resolve_theme(&mut self, choice: ThemeChoice) {
        self.theme = ThemeLifecycle::Resolved(choice);
    }

    /// Flip a resolved theme and hand back the new choice so the caller
    /// can persist it. While the preference is still unresolved this does
    /// nothing and returns `None`: the icon has not committed to a theme
    /// yet, so there is nothing meaningful to flip.
    pub fn toggle_theme(&mut self) -> Option<ThemeChoice> {
        match self.theme {
            ThemeLifecycle::Unresolved => None,
            ThemeLifecycle::Resolved(current) => {
                let next = current.flipped();
                self.theme = ThemeLifecycle::Resolved(next);
                Some(next)
            }
        }
    }

    /// Whether the window is below the responsive breakpoint
    pub fn is_compact(&self) -> bool {
        self.window_width < COMPACT_BREAKPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::ASSETS;

    #[test]
    fn test_category_toggle_is_involutive() {
        let mut state = ViewState::default();

        state.toggle_category(Category::Bim);
        assert_eq!(state.active_category, Some(Category::Bim));

        state.toggle_category(Category::Bim);
        assert_eq!(state.active_category, None);
    }

    #[test]
    fn test_selecting_another_category_replaces_the_active_one() {
        let mut state = ViewState::default();

        state.toggle_category(Category::Bim);
        state.toggle_category(Category::Renders);
        assert_eq!(state.active_category, Some(Category::Renders));
    }

    #[test]
    fn test_modal_select_and_dismiss() {
        let mut state = ViewState::default();
        assert!(!state.modal_open);

        state.open_asset(&ASSETS[1]);
        assert!(state.modal_open);
        assert_eq!(state.selected.map(|a| a.id), Some("a2"));

        state.dismiss_modal();
        assert!(!state.modal_open);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_dismiss_from_closed_is_a_noop() {
        let mut state = ViewState::default();
        let before = state.clone();

        state.dismiss_modal();
        assert_eq!(state, before);
    }

    #[test]
    fn test_theme_toggle_requires_resolution() {
        let mut state = ViewState::default();

        assert_eq!(state.toggle_theme(), None);
        assert!(!state.theme.is_resolved());
        // Neutral default while unresolved
        assert_eq!(state.theme.effective(), ThemeChoice::Light);
    }

    #[test]
    fn test_double_toggle_returns_to_the_resolved_default() {
        let mut state = ViewState::default();
        state.resolve_theme(ThemeChoice::Light);

        assert_eq!(state.toggle_theme(), Some(ThemeChoice::Dark));
        assert_eq!(state.toggle_theme(), Some(ThemeChoice::Light));
        assert_eq!(state.theme.effective(), ThemeChoice::Light);
    }

    #[test]
    fn test_menu_open_close() {
        let mut state = ViewState::default();

        state.open_menu();
        assert!(state.mobile_menu_open);

        state.close_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_compact_breakpoint() {
        let mut state = ViewState::default();
        assert!(!state.is_compact());

        state.window_width = 600.0;
        assert!(state.is_compact());
    }
}
