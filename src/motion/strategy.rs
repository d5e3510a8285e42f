use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::config::ANCHOR_SCROLL_OFFSET_PX;
use crate::error::SiteError;

pub type StyleSet = &'static [(&'static str, &'static str)];

/// Which animation backend drives reveals and scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionStrategy {
    /// CSS transitions toggled by a class.
    Native,
    /// Inline styles scheduled with a stagger, scroll with a fixed header offset.
    Timeline,
}

impl MotionStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "native" | "css" => Some(Self::Native),
            "timeline" | "scripted" => Some(Self::Timeline),
            _ => None,
        }
    }

    pub fn backend(self) -> Rc<dyn MotionBackend> {
        match self {
            Self::Native => Rc::new(CssTransitions),
            Self::Timeline => Rc::new(StaggeredTimeline),
        }
    }
}

pub trait MotionBackend {
    fn name(&self) -> &'static str;
    fn hidden_style(&self) -> StyleSet;
    fn revealed_style(&self) -> StyleSet;
    fn revealed_class(&self) -> Option<&'static str>;
    /// Delay before the element at `order` within a batch starts its reveal.
    fn reveal_delay_ms(&self, order: usize) -> u32;
    fn scroll_to(&self, target: &Element) -> Result<(), SiteError>;
}

pub struct CssTransitions;

impl MotionBackend for CssTransitions {
    fn name(&self) -> &'static str {
        "native"
    }

    fn hidden_style(&self) -> StyleSet {
        &[
            ("opacity", "0"),
            ("transform", "translateY(30px)"),
            ("transition", "all 0.6s ease"),
        ]
    }

    fn revealed_style(&self) -> StyleSet {
        &[("opacity", "1"), ("transform", "translateY(0)")]
    }

    fn revealed_class(&self) -> Option<&'static str> {
        Some("fade-in-up")
    }

    fn reveal_delay_ms(&self, _order: usize) -> u32 {
        0
    }

    fn scroll_to(&self, target: &Element) -> Result<(), SiteError> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

pub const TIMELINE_STAGGER_MS: u32 = 150;

pub struct StaggeredTimeline;

impl MotionBackend for StaggeredTimeline {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn hidden_style(&self) -> StyleSet {
        &[("opacity", "0"), ("transform", "translateY(50px)")]
    }

    fn revealed_style(&self) -> StyleSet {
        &[
            ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
            ("opacity", "1"),
            ("transform", "translateY(0)"),
        ]
    }

    fn revealed_class(&self) -> Option<&'static str> {
        None
    }

    fn reveal_delay_ms(&self, order: usize) -> u32 {
        order as u32 * TIMELINE_STAGGER_MS
    }

    fn scroll_to(&self, target: &Element) -> Result<(), SiteError> {
        let window = window().ok_or(SiteError::NoWindow)?;
        let top = anchor_scroll_top(
            target.get_bounding_client_rect().top(),
            window.scroll_y()?,
            ANCHOR_SCROLL_OFFSET_PX,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

/// Document offset to scroll to so the target lands just below a fixed header.
pub fn anchor_scroll_top(rect_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (rect_top + scroll_y - offset).max(0.0)
}

pub fn apply_style(el: &HtmlElement, styles: StyleSet) {
    let style = el.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("could not set {}: {:?}", property, e);
        }
    }
}

pub fn hide(backend: &dyn MotionBackend, el: &HtmlElement) {
    apply_style(el, backend.hidden_style());
}

/// Applies the revealed state now, or after the backend's stagger delay.
pub fn reveal(backend: &dyn MotionBackend, el: &HtmlElement, order: usize) {
    let styles = backend.revealed_style();
    let class = backend.revealed_class();
    let finish = {
        let el = el.clone();
        move || {
            if let Some(class) = class {
                let _ = el.class_list().add_1(class);
            }
            apply_style(&el, styles);
        }
    };

    match backend.reveal_delay_ms(order) {
        0 => finish(),
        delay => {
            Timeout::new(delay, finish).forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_names() {
        assert_eq!(MotionStrategy::parse("native"), Some(MotionStrategy::Native));
        assert_eq!(MotionStrategy::parse(" Timeline "), Some(MotionStrategy::Timeline));
        assert_eq!(MotionStrategy::parse("scripted"), Some(MotionStrategy::Timeline));
        assert_eq!(MotionStrategy::parse(""), None);
    }

    #[test]
    fn native_reveals_at_once_with_class() {
        let backend = MotionStrategy::Native.backend();
        assert_eq!(backend.name(), "native");
        assert_eq!(backend.revealed_class(), Some("fade-in-up"));
        assert_eq!(backend.reveal_delay_ms(0), 0);
        assert_eq!(backend.reveal_delay_ms(4), 0);
        assert!(backend.hidden_style().contains(&("transform", "translateY(30px)")));
    }

    #[test]
    fn timeline_staggers_by_batch_order() {
        let backend = MotionStrategy::Timeline.backend();
        assert_eq!(backend.revealed_class(), None);
        let delays: Vec<u32> = (0..4).map(|i| backend.reveal_delay_ms(i)).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
    }

    #[test]
    fn both_backends_end_fully_visible() {
        for strategy in [MotionStrategy::Native, MotionStrategy::Timeline] {
            let backend = strategy.backend();
            assert!(backend.revealed_style().contains(&("opacity", "1")));
            assert!(backend.revealed_style().contains(&("transform", "translateY(0)")));
            assert!(backend.hidden_style().contains(&("opacity", "0")));
        }
    }

    #[test]
    fn anchor_offset_clears_fixed_header() {
        assert_eq!(anchor_scroll_top(500.0, 1000.0, 80.0), 1420.0);
        assert_eq!(anchor_scroll_top(20.0, 0.0, 80.0), 0.0);
    }
}
