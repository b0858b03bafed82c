//! Dark mode toggle.
//!
//! The preference is stored under `darkMode` and applied as the `dark-mode`
//! class on `<body>`. All colour changes live in the injected stylesheet.

use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::storage::{KeyValueStore, LocalStorage, PersistedFlag};
use contracts::preferences::PreferenceKey;
use leptos::prelude::*;

/// Dark mode state over some key-value store.
#[derive(Debug)]
pub struct DarkMode<S> {
    flag: PersistedFlag<S>,
}

impl<S: KeyValueStore> DarkMode<S> {
    pub fn new(store: S) -> Self {
        Self {
            flag: PersistedFlag::new(PreferenceKey::DarkMode, store),
        }
    }

    /// Persisted preference, to be applied before the toggle is shown.
    pub fn restore(&self) -> bool {
        self.flag.restore()
    }

    /// Flip and persist. Returns the new state.
    pub fn toggle(&self) -> bool {
        self.flag.toggle()
    }
}

/// Icon shown on the toggle: what a click switches to.
pub fn toggle_icon_name(enabled: bool) -> &'static str {
    if enabled {
        "sun"
    } else {
        "moon"
    }
}

fn apply_dark_mode(enabled: bool) {
    dom::set_body_class(PreferenceKey::DarkMode.body_class(), enabled);
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let dark_mode = DarkMode::new(LocalStorage);

    let initial = dark_mode.restore();
    apply_dark_mode(initial);
    let enabled = RwSignal::new(initial);

    let on_toggle = move |_| {
        let next = dark_mode.toggle();
        apply_dark_mode(next);
        enabled.set(next);
        log::debug!("Dark mode: {}", next);
    };

    view! {
        <button
            id="dark-mode-toggle"
            class="dark-mode-toggle"
            type="button"
            aria-pressed=move || if enabled.get() { "true" } else { "false" }
            title=move || if enabled.get() { "Modo claro" } else { "Modo escuro" }
            on:click=on_toggle
        >
            {move || icon(toggle_icon_name(enabled.get()))}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::testing::DroppingStore;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn starts_disabled_without_stored_preference() {
        assert!(!DarkMode::new(MemoryStore::default()).restore());
    }

    #[test]
    fn toggle_survives_reload() {
        let store = MemoryStore::default();

        let first_page = DarkMode::new(store.clone());
        assert!(first_page.toggle());
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));

        // A fresh controller over the same storage is a page reload.
        let reloaded = DarkMode::new(store.clone());
        assert!(reloaded.restore());

        assert!(!reloaded.toggle());
        assert!(!DarkMode::new(store).restore());
    }

    #[test]
    fn toggle_alternates_without_working_storage() {
        let dark_mode = DarkMode::new(DroppingStore);
        assert!(!dark_mode.restore());

        let states: Vec<bool> = (0..3).map(|_| dark_mode.toggle()).collect();
        assert_eq!(states, vec![true, false, true]);
    }

    #[test]
    fn icon_offers_the_other_mode() {
        assert_eq!(toggle_icon_name(false), "moon");
        assert_eq!(toggle_icon_name(true), "sun");
    }
}
