use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::REVEAL_THRESHOLD;
use crate::error::SiteError;
use crate::motion::strategy::{self, MotionBackend};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot reveal-on-scroll: every observed element is revealed the first
/// time it intersects the viewport and is then dropped from the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    backend: Rc<dyn MotionBackend>,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub fn new(backend: Rc<dyn MotionBackend>) -> Result<Self, SiteError> {
        let callback = {
            let backend = backend.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let mut order = 0;
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if let Some(el) = target.dyn_ref::<HtmlElement>() {
                            strategy::reveal(backend.as_ref(), el, order);
                            order += 1;
                        }
                        observer.unobserve(&target);
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        log::debug!("reveal observer ready ({} backend)", backend.name());
        Ok(Self {
            observer,
            backend,
            _callback: callback,
        })
    }

    pub fn backend(&self) -> &dyn MotionBackend {
        self.backend.as_ref()
    }

    /// Reveals elements already on screen, hides and watches the rest.
    pub fn observe(&self, el: &Element) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            self.observer.observe(el);
            return;
        };

        let rect = el.get_bounding_client_rect();
        let viewport_height = window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);

        if in_viewport(rect.top(), rect.bottom(), viewport_height) {
            strategy::reveal(self.backend(), html, 0);
        } else {
            strategy::hide(self.backend(), html);
            self.observer.observe(el);
        }
    }

    pub fn observe_all(&self, selector: &str) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let nodes = match document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("bad reveal selector {}: {:?}", selector, e);
                return;
            }
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.observe(&el);
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Cloneable handle passed to components as a prop.
#[derive(Clone)]
pub struct RevealHandle(pub Rc<RevealObserver>);

impl RevealHandle {
    pub fn observe(&self, el: &Element) {
        self.0.observe(el);
    }
}

impl PartialEq for RevealHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
