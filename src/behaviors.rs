//! Listeners for the static marketing markup around the Yew regions.
//!
//! Every behavior looks its elements up first and does nothing when they
//! are missing. Listeners are installed once and live as long as the page.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use gloo_timers::callback::Timeout;

use crate::config::{HERO_START_DELAY_MS, PAGE_FADE_IN_DELAY_MS};
use crate::error::SiteError;
use crate::motion::effects::{self, PRESS, PULSE, PULSE_KEYFRAMES};
use crate::motion::observer::RevealObserver;
use crate::motion::strategy::{self, apply_style, MotionBackend};

pub const PRESS_TARGETS: &str = ".cta-primary, .cta-secondary";
pub const STATIC_REVEAL_TARGETS: &str =
    ".section-header, .step-card, .feature-card, .testimonial-card, .trust-badge";
pub const HERO_SEQUENCE: [&str; 5] = [
    ".hero-headline",
    ".hero-subheadline",
    ".cta-primary",
    ".microcopy",
    ".hero-interactive",
];

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn select_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// The in-page selector an anchor href points at, if it should smooth scroll.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Delegated click handler for every `a[href^="#"]`, including ones Yew renders later.
pub fn smooth_scroll_anchors(
    document: &Document,
    backend: Rc<dyn MotionBackend>,
) -> Result<(), SiteError> {
    let doc = document.clone();
    listen(document, "click", move |event: Event| {
        let anchor = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
        let Some(anchor) = anchor else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };

        event.prevent_default();
        match doc.query_selector(selector) {
            Ok(Some(target)) => {
                if let Err(e) = backend.scroll_to(&target) {
                    log::warn!("scroll to {} failed: {}", selector, e);
                }
            }
            Ok(None) => log::debug!("anchor {} has no target", selector),
            Err(e) => log::warn!("anchor {} is not a valid selector: {:?}", selector, e),
        }
    })
}

pub fn press_feedback(document: &Document) -> Result<usize, SiteError> {
    let buttons = select_all(document, PRESS_TARGETS);
    for button in &buttons {
        let el = button.clone();
        listen(button, "click", move |_| effects::play(&el, PRESS))?;
    }
    Ok(buttons.len())
}

/// `#startDemoBtn` scrolls the configurator into view and pulses it.
pub fn demo_button(document: &Document, backend: Rc<dyn MotionBackend>) -> Result<(), SiteError> {
    let Some(button) = document.get_element_by_id("startDemoBtn") else {
        return Ok(());
    };
    let doc = document.clone();
    listen(&button, "click", move |_| {
        let Some(section) = select_one(&doc, ".hero-interactive") else {
            return;
        };
        if let Err(e) = backend.scroll_to(&section) {
            log::warn!("demo scroll failed: {}", e);
        }
        if let Some(wizard) = select_one(&doc, ".config-wizard") {
            effects::play(&wizard, PULSE);
        }
    })
}

pub fn inject_pulse_keyframes(document: &Document) -> Result<(), SiteError> {
    if document.get_element_by_id("pulse-keyframes").is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id("pulse-keyframes");
    style.set_text_content(Some(PULSE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

pub fn hover_lift(document: &Document) -> Result<(), SiteError> {
    for card in select_all(document, ".feature-card") {
        let on_enter = card.clone();
        listen(&card, "mouseenter", move |_| {
            let _ = on_enter.style().set_property("transform", "translateY(-8px)");
        })?;
        let on_leave = card.clone();
        listen(&card, "mouseleave", move |_| {
            let _ = on_leave.style().remove_property("transform");
        })?;
    }
    Ok(())
}

/// Plays the hero elements in order through the active motion backend.
pub fn hero_entrance(document: &Document, backend: Rc<dyn MotionBackend>) {
    let elements: Vec<HtmlElement> = HERO_SEQUENCE
        .iter()
        .filter_map(|selector| select_one(document, selector))
        .collect();
    for el in &elements {
        strategy::hide(backend.as_ref(), el);
    }

    // The hidden state has to be painted once or there is nothing to transition from.
    Timeout::new(HERO_START_DELAY_MS, move || {
        for (order, el) in elements.iter().enumerate() {
            strategy::reveal(backend.as_ref(), el, order);
        }
    })
    .forget();
}

pub fn reveal_static(observer: &RevealObserver) {
    observer.observe_all(STATIC_REVEAL_TARGETS);
}

pub fn page_fade_in(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    apply_style(&body, &[("opacity", "0")]);
    Timeout::new(PAGE_FADE_IN_DELAY_MS, move || {
        apply_style(&body, &[("transition", "opacity 0.5s ease"), ("opacity", "1")]);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_a_scroll_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn fragment_links_scroll() {
        assert_eq!(anchor_target("#pricing"), Some("#pricing"));
        assert_eq!(anchor_target("#a"), Some("#a"));
    }

    #[test]
    fn external_links_are_left_alone() {
        assert_eq!(anchor_target("/pricing#plans"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn hero_sequence_ends_with_configurator() {
        assert_eq!(HERO_SEQUENCE[0], ".hero-headline");
        assert_eq!(HERO_SEQUENCE[HERO_SEQUENCE.len() - 1], ".hero-interactive");
    }
}
