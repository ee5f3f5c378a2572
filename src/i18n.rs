//! One-shot localization pass over the rendered page.
//!
//! The hosting page injects `window.I18N_CONTENT`, a map from language code
//! to `{ dir, strings }`. At boot the document's declared `lang` picks an
//! entry, falling back to English, the text direction is applied to the
//! root, and every `[data-i18n]` / `[data-i18n-attr]` element receives its
//! translated text or attributes. Nothing here runs again after boot.

use std::collections::HashMap;

use serde::Deserialize;
use web_sys::Document;

use crate::config;
use crate::dom;
use crate::error::Result;

const TEXT_KEY_ATTR: &str = "data-i18n";
const ATTR_MAP_ATTR: &str = "data-i18n-attr";
const DEFAULT_LANGUAGE: &str = "en";

/// Writing direction of a language entry. Anything that is not literally
/// `"rtl"` renders left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("rtl") => TextDirection::RightToLeft,
            _ => TextDirection::LeftToRight,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

// Raw shape of one entry in the injected table. Translation values stay
// untyped here so a single stray number cannot sink the whole entry.
#[derive(Debug, Deserialize)]
struct RawEntry {
    dir: Option<String>,
    #[serde(default)]
    strings: HashMap<String, serde_json::Value>,
}

/// A usable language entry: direction plus the string-valued translations.
#[derive(Debug)]
pub struct LanguagePack {
    direction: TextDirection,
    strings: HashMap<String, String>,
}

impl LanguagePack {
    fn from_value(value: &serde_json::Value) -> Option<Self> {
        let raw: RawEntry = serde_json::from_value(value.clone()).ok()?;
        let strings = raw
            .strings
            .into_iter()
            .filter_map(|(key, value)| Some((key, value.as_str()?.to_string())))
            .collect();
        Some(LanguagePack {
            direction: TextDirection::parse(raw.dir.as_deref()),
            strings,
        })
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

/// Prioritized lookup: the declared language first, then English. Entries
/// that are missing or not usable as a pack keep the chain going.
pub fn resolve(table: &serde_json::Value, declared: &str) -> Option<LanguagePack> {
    [declared, DEFAULT_LANGUAGE]
        .into_iter()
        .find_map(|code| table.get(code).and_then(LanguagePack::from_value))
}

/// One `attribute:key` pair from a `data-i18n-attr` list.
#[derive(Debug, PartialEq, Eq)]
pub struct AttrMapping {
    pub attribute: String,
    pub key: String,
}

/// Parses `"placeholder:search_hint, title:search_title"`. Blank entries and
/// mappings missing either side are dropped; anything after a second colon
/// is ignored.
pub fn parse_attr_mappings(raw: &str) -> Vec<AttrMapping> {
    raw.split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(':');
            let attribute = parts.next().unwrap_or("").trim();
            let key = parts.next().unwrap_or("").trim();
            if attribute.is_empty() || key.is_empty() {
                return None;
            }
            Some(AttrMapping {
                attribute: attribute.to_string(),
                key: key.to_string(),
            })
        })
        .collect()
}

/// Applies the injected translations to the current document.
pub fn apply(document: &Document) -> Result<()> {
    let declared = document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let pack = config::i18n_content()
        .as_ref()
        .and_then(|table| resolve(table, &declared));

    // Direction falls back to ltr even when no language resolves.
    let direction = pack
        .as_ref()
        .map(|pack| pack.direction())
        .unwrap_or_default();
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", direction.as_attr());
    }

    let pack = match pack {
        Some(pack) => pack,
        None => return Ok(()),
    };
    apply_text(document, &pack)?;
    apply_attributes(document, &pack)
}

fn apply_text(document: &Document, pack: &LanguagePack) -> Result<()> {
    for element in dom::query_all(document, &format!("[{}]", TEXT_KEY_ATTR))? {
        let key = match element.get_attribute(TEXT_KEY_ATTR) {
            Some(key) => key,
            None => continue,
        };
        if let Some(text) = pack.lookup(&key) {
            element.set_text_content(Some(text));
        }
    }
    Ok(())
}

fn apply_attributes(document: &Document, pack: &LanguagePack) -> Result<()> {
    for element in dom::query_all(document, &format!("[{}]", ATTR_MAP_ATTR))? {
        let raw = match element.get_attribute(ATTR_MAP_ATTR) {
            Some(raw) => raw,
            None => continue,
        };
        for mapping in parse_attr_mappings(&raw) {
            if let Some(value) = pack.lookup(&mapping.key) {
                let _ = element.set_attribute(&mapping.attribute, value);
            }
        }
    }
    Ok(())
}
