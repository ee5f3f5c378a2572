//! Project showcase tabs: exactly one visible slide, driven by `data-index`.

use web_sys::{Document, Element};

use crate::dom;
use crate::error::{Error, Result};

const TAB_SELECTOR: &str = ".project-tab";
const SLIDE_SELECTOR: &str = ".project-slide";
const INDEX_ATTR: &str = "data-index";
const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";

// Styling swapped between the selected tab and the rest.
const SELECTED_STYLES: [&str; 3] = ["border-primary", "text-neutral-dark", "dark:text-white"];
const UNSELECTED_STYLES: [&str; 2] = ["border-transparent", "text-gray-500"];

pub fn init(document: &Document) -> Result<()> {
    for tab in dom::query_all(document, TAB_SELECTOR)? {
        let clicked = tab.clone();
        dom::listen(&tab, "click", move |_| {
            if let Err(err) = activate(&clicked) {
                log::error!("Rejected project tab click: {}", err);
            }
        })?;
    }
    Ok(())
}

/// Shows the slide the tab points at and restyles the tab row. The index is
/// validated before anything is touched, so a bad tab leaves the page as is.
pub fn activate(tab: &Element) -> Result<()> {
    let document = dom::document()?;
    let tabs = dom::query_all(&document, TAB_SELECTOR)?;
    let slides = dom::query_all(&document, SLIDE_SELECTOR)?;

    let index = parse_index(tab.get_attribute(INDEX_ATTR))?;
    let selected = slides.get(index).ok_or(Error::TabOutOfRange {
        index,
        slide_count: slides.len(),
    })?;

    for other in &tabs {
        let classes = other.class_list();
        let _ = classes.remove_1(ACTIVE_CLASS);
        for class in SELECTED_STYLES {
            let _ = classes.remove_1(class);
        }
        for class in UNSELECTED_STYLES {
            let _ = classes.add_1(class);
        }
    }
    for slide in &slides {
        let _ = slide.class_list().add_1(HIDDEN_CLASS);
    }

    let classes = tab.class_list();
    let _ = classes.add_1(ACTIVE_CLASS);
    for class in UNSELECTED_STYLES {
        let _ = classes.remove_1(class);
    }
    for class in SELECTED_STYLES {
        let _ = classes.add_1(class);
    }
    let _ = selected.class_list().remove_1(HIDDEN_CLASS);
    Ok(())
}

/// `data-index` must parse as a slide position.
fn parse_index(raw: Option<String>) -> Result<usize> {
    let value = raw.unwrap_or_default();
    let trimmed = value.trim();
    trimmed.parse().map_err(|_| Error::BadTabIndex {
        value: trimmed.to_string(),
    })
}
