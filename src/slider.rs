//! Before/after comparison sliders.
//!
//! Dragging moves a handle and re-clips the "before" image to reveal the
//! "after" underneath; the side labels fade out near the edges. A single
//! coordinator owns the drag so only one slider follows the pointer at a
//! time, page-wide.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, TouchEvent};

use crate::dom;
use crate::error::Result;

const SLIDER_SELECTOR: &str = ".before-after-slider";
const HANDLE_SELECTOR: &str = ".slider-handle";
const BEFORE_IMAGE_SELECTOR: &str = ".before-image";
const LEFT_LABEL_SELECTOR: &str = ".left-label";
const RIGHT_LABEL_SELECTOR: &str = ".right-label";

const LEFT_FADE_BELOW: f64 = 15.0;
const RIGHT_FADE_ABOVE: f64 = 85.0;

/// Tracks which slider, if any, currently follows the pointer. Clones share
/// the same underlying state, so every listener sees the same drag.
#[derive(Clone, Default)]
pub struct DragCoordinator {
    active: Rc<RefCell<Option<Element>>>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `slider` and applies the position right away.
    /// Beginning while another slider is active silently takes over.
    pub fn begin(&self, slider: Element, page_x: f64) {
        *self.active.borrow_mut() = Some(slider);
        self.update(page_x);
    }

    /// Repositions the active slider; without one this is a no-op.
    pub fn update(&self, page_x: f64) {
        let slider = self.active.borrow().clone();
        if let Some(slider) = slider {
            apply_position(&slider, page_x);
        }
    }

    pub fn end(&self) {
        self.active.borrow_mut().take();
    }

    pub fn is_dragging(&self) -> bool {
        self.active.borrow().is_some()
    }
}

/// Percentage of the slider width the pointer sits at, clamped to [0, 100].
/// A slider that has not been laid out yet (no width) reads as 0.
pub fn position_percent(page_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    ((page_x - left) / width * 100.0).clamp(0.0, 100.0)
}

/// Opacity writes for the two labels; `None` leaves a label alone. Past the
/// right edge only the right label is touched, mirroring how the left edge
/// rule only touches the left label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOpacity {
    pub left: Option<f64>,
    pub right: Option<f64>,
}

pub fn label_opacity(position: f64) -> LabelOpacity {
    if position < LEFT_FADE_BELOW {
        LabelOpacity {
            left: Some(0.0),
            right: None,
        }
    } else if position > RIGHT_FADE_ABOVE {
        LabelOpacity {
            left: None,
            right: Some(0.0),
        }
    } else {
        LabelOpacity {
            left: Some(1.0),
            right: Some(1.0),
        }
    }
}

// Geometry and children are looked up per update, never cached.
fn apply_position(slider: &Element, page_x: f64) {
    let rect = slider.get_bounding_client_rect();
    let position = position_percent(page_x, rect.left(), rect.width());

    if let Ok(Some(handle)) = slider.query_selector(HANDLE_SELECTOR) {
        dom::set_style(&handle, "left", &format!("{}%", position));
    }
    if let Ok(Some(image)) = slider.query_selector(BEFORE_IMAGE_SELECTOR) {
        dom::set_style(
            &image,
            "clip-path",
            &format!("inset(0 {}% 0 0)", 100.0 - position),
        );
    }

    let opacity = label_opacity(position);
    if let Some(value) = opacity.left {
        if let Ok(Some(label)) = slider.query_selector(LEFT_LABEL_SELECTOR) {
            dom::set_style(&label, "opacity", &value.to_string());
        }
    }
    if let Some(value) = opacity.right {
        if let Ok(Some(label)) = slider.query_selector(RIGHT_LABEL_SELECTOR) {
            dom::set_style(&label, "opacity", &value.to_string());
        }
    }
}

/// Wires every slider on the page plus the window-level move/end listeners.
pub fn init(document: &Document) -> Result<()> {
    let coordinator = DragCoordinator::new();

    for slider in dom::query_all(document, SLIDER_SELECTOR)? {
        let on_mouse = coordinator.clone();
        let mouse_target = slider.clone();
        dom::listen(&slider, "mousedown", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_mouse.begin(mouse_target.clone(), event.page_x() as f64);
            }
        })?;

        let on_touch = coordinator.clone();
        let touch_target = slider.clone();
        dom::listen(&slider, "touchstart", move |event| {
            if let Some(event) = event.dyn_ref::<TouchEvent>() {
                if let Some(touch) = event.touches().get(0) {
                    on_touch.begin(touch_target.clone(), touch.page_x() as f64);
                }
            }
        })?;
    }

    let window = dom::window()?;

    let on_move = coordinator.clone();
    dom::listen(&window, "mousemove", move |event| {
        if !on_move.is_dragging() {
            return;
        }
        // Keeps the browser from selecting text mid drag.
        event.prevent_default();
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            on_move.update(event.page_x() as f64);
        }
    })?;

    let on_touch_move = coordinator.clone();
    dom::listen(&window, "touchmove", move |event| {
        if let Some(event) = event.dyn_ref::<TouchEvent>() {
            if let Some(touch) = event.touches().get(0) {
                on_touch_move.update(touch.page_x() as f64);
            }
        }
    })?;

    let on_mouse_up = coordinator.clone();
    dom::listen(&window, "mouseup", move |_| on_mouse_up.end())?;

    let on_touch_end = coordinator;
    dom::listen(&window, "touchend", move |_| on_touch_end.end())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_clamped_to_the_percent_range() {
        assert_eq!(position_percent(50.0, 100.0, 200.0), 0.0);
        assert_eq!(position_percent(100.0, 100.0, 200.0), 0.0);
        assert_eq!(position_percent(200.0, 100.0, 200.0), 50.0);
        assert_eq!(position_percent(300.0, 100.0, 200.0), 100.0);
        assert_eq!(position_percent(450.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn position_grows_with_pointer_x() {
        let mut last = position_percent(0.0, 100.0, 200.0);
        for step in 1..60 {
            let next = position_percent(f64::from(step) * 10.0, 100.0, 200.0);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn zero_width_slider_reads_zero() {
        assert_eq!(position_percent(250.0, 100.0, 0.0), 0.0);
        assert_eq!(position_percent(250.0, 100.0, -5.0), 0.0);
    }

    #[test]
    fn fades_left_label_only_below_the_lower_threshold() {
        let opacity = label_opacity(10.0);
        assert_eq!(opacity.left, Some(0.0));
        assert_eq!(opacity.right, None);
    }

    #[test]
    fn fades_right_label_only_past_the_upper_threshold() {
        let opacity = label_opacity(90.0);
        assert_eq!(opacity.left, None);
        assert_eq!(opacity.right, Some(0.0));
    }

    #[test]
    fn middle_band_restores_both_labels() {
        for position in [15.0, 50.0, 85.0] {
            let opacity = label_opacity(position);
            assert_eq!(opacity.left, Some(1.0));
            assert_eq!(opacity.right, Some(1.0));
        }
    }

    #[test]
    fn coordinator_starts_idle() {
        assert!(!DragCoordinator::new().is_dragging());
    }

    #[test]
    fn ending_or_updating_without_a_drag_is_harmless() {
        let coordinator = DragCoordinator::new();
        coordinator.end();
        coordinator.update(40.0);
        assert!(!coordinator.is_dragging());
    }
}
