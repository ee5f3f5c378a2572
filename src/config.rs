//! Values the hosting page provides: injected globals and storage keys.

use web_sys::js_sys;

/// localStorage key the theme choice persists under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Name of the injected translation table global.
pub const I18N_GLOBAL: &str = "I18N_CONTENT";

/// Reads `window.I18N_CONTENT` as JSON. `None` when the page injects nothing
/// or the value does not survive a round trip through `JSON.stringify`.
pub fn i18n_content() -> Option<serde_json::Value> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &I18N_GLOBAL.into()).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&raw).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}
