use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::motion::scroll::ViewportSample;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads the platform's reduced-motion preference. A failing or unsupported
/// media query counts as "no preference".
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn viewport_sample() -> Option<ViewportSample> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    Some(ViewportSample {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Top edge of the element matching `selector`, in document coordinates.
pub fn section_top(selector: &str) -> Option<f64> {
    let window = window()?;
    let element = window.document()?.query_selector(selector).ok()??;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

/// A pending `requestAnimationFrame`. Dropping the handle cancels the frame
/// if it has not run yet.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    pub fn request<F>(callback: F) -> Option<Self>
    where
        F: FnOnce(f64) + 'static,
    {
        let callback: Closure<dyn FnMut(f64)> = Closure::once(callback);
        let id = window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// An `IntersectionObserver` watching a single element, disconnected on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_entry` receives `(is_intersecting, intersection_ratio)` for every
    /// reading the browser delivers and returns true once it has seen enough;
    /// the observer then disconnects itself.
    pub fn observe<F>(target: &Element, threshold: f64, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(bool, f64) -> bool + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_entry(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
