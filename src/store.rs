//! UI State Store
//!
//! Uses Leptos reactive_stores for the two page-level flags.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::theme::Theme;

/// Page-level UI flags with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Light or dark presentation
    pub theme: Theme,
    /// Mobile navigation panel visibility
    pub menu_open: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip between light and dark
pub fn store_toggle_theme(store: &UiStore) {
    store.theme().update(|theme| *theme = theme.toggled());
}

/// Open or close the mobile menu
pub fn store_toggle_menu(store: &UiStore) {
    store.menu_open().update(|open| *open = !*open);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_double_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            store_toggle_theme(&store);
            assert_eq!(store.theme().get_untracked(), Theme::Dark);
            store_toggle_theme(&store);
            assert_eq!(store.theme().get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn test_menu_double_toggle_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            assert!(!store.menu_open().get_untracked());
            store_toggle_menu(&store);
            assert!(store.menu_open().get_untracked());
            store_toggle_menu(&store);
            assert!(!store.menu_open().get_untracked());
        });
    }

    #[test]
    fn test_toggles_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(UiState::default());
            store_toggle_menu(&store);
            assert_eq!(store.theme().get_untracked(), Theme::Light);
            store_toggle_theme(&store);
            assert!(store.menu_open().get_untracked());
        });
    }
}
