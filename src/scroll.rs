//! Scroll-driven effects: parallax backgrounds and one-way text reveals.

use web_sys::Event;

use crate::dom;
use crate::error::{Error, Result};

const BACKGROUND_SELECTOR: &str = ".parallax-bg";
const CONTAINER_SELECTOR: &str = ".parallax-container";
const REVEAL_SELECTOR: &str = ".reveal-text";
const REVEAL_CLASS: &str = "active";

const PARALLAX_RATE: f64 = 0.05;
const PARALLAX_SCALE: f64 = 1.1;
const REVEAL_VIEWPORT_FRACTION: f64 = 0.9;

/// Registers the window scroll handler, then fires one synthetic scroll so
/// everything already in view is positioned before the user moves.
pub fn init() -> Result<()> {
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| react())?;

    let kick = Event::new("scroll").map_err(Error::dom)?;
    window.dispatch_event(&kick).map_err(Error::dom)?;
    Ok(())
}

// Geometry is re-read on every event; sections can resize or lazy-load
// between scrolls.
fn react() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        _ => return,
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);

    if let Ok(backgrounds) = dom::query_all(&document, BACKGROUND_SELECTOR) {
        for background in backgrounds {
            let container = match background.closest(CONTAINER_SELECTOR) {
                Ok(Some(container)) => container,
                _ => continue,
            };
            let rect = container.get_bounding_client_rect();
            if !is_on_screen(rect.top(), rect.bottom(), viewport_height) {
                continue;
            }
            let shift = parallax_shift(viewport_height, rect.top());
            dom::set_style(
                &background,
                "transform",
                &format!("translateY({}px) scale({})", shift, PARALLAX_SCALE),
            );
        }
    }

    if let Ok(reveals) = dom::query_all(&document, REVEAL_SELECTOR) {
        for element in reveals {
            let rect = element.get_bounding_client_rect();
            if should_reveal(rect.top(), viewport_height) {
                // Never removed again: the reveal is a one-way latch.
                let _ = element.class_list().add_1(REVEAL_CLASS);
            }
        }
    }
}

/// A container drives its background only while some part of it is visible.
pub fn is_on_screen(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Downward shift in pixels for a container whose top sits at `top`.
pub fn parallax_shift(viewport_height: f64, top: f64) -> f64 {
    (viewport_height - top) * PARALLAX_RATE
}

/// Text reveals once its top enters the upper 90% of the viewport.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_crossing_either_edge_is_on_screen() {
        assert!(is_on_screen(-50.0, 120.0, 800.0));
        assert!(is_on_screen(700.0, 1500.0, 800.0));
        assert!(is_on_screen(100.0, 300.0, 800.0));
    }

    #[test]
    fn container_outside_the_viewport_is_not_on_screen() {
        assert!(!is_on_screen(820.0, 1400.0, 800.0)); // below
        assert!(!is_on_screen(-600.0, -10.0, 800.0)); // above
    }

    #[test]
    fn shift_grows_as_the_container_scrolls_up() {
        assert_eq!(parallax_shift(800.0, 800.0), 0.0);
        assert_eq!(parallax_shift(800.0, 400.0), 20.0);
        assert_eq!(parallax_shift(800.0, 0.0), 40.0);
        assert_eq!(parallax_shift(800.0, -200.0), 50.0);
    }

    #[test]
    fn reveal_threshold_sits_at_ninety_percent_of_the_viewport() {
        assert!(should_reveal(719.0, 800.0));
        assert!(!should_reveal(720.0, 800.0)); // exactly at the threshold stays hidden
        assert!(!should_reveal(900.0, 800.0));
    }
}
