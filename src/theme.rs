//! Light/dark switch: flips the root `dark` class and remembers the choice.
//!
//! The initial theme is the host page's job (an inline script applies the
//! stored value before first paint); this module only handles the toggles.

use web_sys::Document;

use crate::config;
use crate::dom;
use crate::error::Result;

const DARK_CLASS: &str = "dark";
const TOGGLE_IDS: [&str; 2] = ["theme-toggle", "mobile-theme-toggle"];

/// The two states the page styles know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Wires the desktop and mobile toggle buttons. A page rendering only one of
/// them simply gets one listener.
pub fn init(document: &Document) -> Result<()> {
    for id in TOGGLE_IDS {
        if let Some(button) = document.get_element_by_id(id) {
            dom::listen(&button, "click", move |_| toggle())?;
        }
    }
    Ok(())
}

/// Flips the root element's `dark` class and persists the resulting theme.
pub fn toggle() {
    if let Ok(document) = dom::document() {
        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let theme = if classes.contains(DARK_CLASS) {
                let _ = classes.remove_1(DARK_CLASS);
                Theme::Light
            } else {
                let _ = classes.add_1(DARK_CLASS);
                Theme::Dark
            };
            persist(theme);
        }
    }
}

// Storage can be disabled or full; the visual flip must not depend on it.
fn persist(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
        }
    }
}
