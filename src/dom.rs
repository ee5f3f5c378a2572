//! Small helpers over web-sys shared by every behavior.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

/// Collects the elements matching `selector`, skipping non-element nodes.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector).map_err(Error::dom)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Registers `handler` for `kind` events and leaks the closure; listeners
/// stay installed for the whole page session, there is no teardown path.
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .map_err(Error::dom)?;
    callback.forget();
    Ok(())
}

/// Best-effort inline style write. Nodes that are not HTML elements carry no
/// style and are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}
