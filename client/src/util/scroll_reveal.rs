//! Scroll-triggered reveal animations.
//!
//! Cards and chart containers start hidden (see the stylesheet) and gain
//! [`REVEALED_CLASS`] the first time they scroll into view. Browser-only;
//! server rendering skips the observer.

use crate::util::error::UiError;

/// Elements animated on first intersection.
pub const REVEAL_SELECTOR: &str = ".feature-card, .stat-card, .testimonial-card, .chart-container";
pub const REVEALED_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Start observing every reveal target. Returns how many were found.
///
/// # Errors
///
/// Returns [`UiError::NotFound`] when the document or `IntersectionObserver`
/// is unavailable.
pub fn install() -> Result<usize, UiError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::NotFound("document".to_owned()))?;

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(|_| UiError::NotFound("IntersectionObserver".to_owned()))?;
        on_intersect.forget();

        let nodes = document
            .query_selector_all(REVEAL_SELECTOR)
            .map_err(|_| UiError::NotFound(REVEAL_SELECTOR.to_owned()))?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&el);
                observed += 1;
            }
        }
        Ok(observed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(0)
    }
}
