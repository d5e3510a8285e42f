//! Short-lived inline style effects: button presses, price bumps, pulses.
//!
//! Each effect sets a style property and schedules its reset. The timers
//! are never cancelled, so repeated clicks each schedule their own reset
//! and the last one to fire decides the final value.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::config::{PRESS_RESET_MS, PRICE_BUMP_RESET_MS, PULSE_RESET_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransientStyle {
    pub property: &'static str,
    pub active: &'static str,
    pub rest: &'static str,
    pub reset_after_ms: u32,
}

pub const PRESS: TransientStyle = TransientStyle {
    property: "transform",
    active: "scale(0.95)",
    rest: "",
    reset_after_ms: PRESS_RESET_MS,
};

pub const PRICE_BUMP: TransientStyle = TransientStyle {
    property: "transform",
    active: "scale(1.1)",
    rest: "scale(1)",
    reset_after_ms: PRICE_BUMP_RESET_MS,
};

pub const PULSE: TransientStyle = TransientStyle {
    property: "animation",
    active: "pulse 0.5s ease",
    rest: "",
    reset_after_ms: PULSE_RESET_MS,
};

pub const PULSE_KEYFRAMES: &str = "@keyframes pulse {\n\
    0%,100% { transform: scale(1); box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); }\n\
    50% { transform: scale(1.02); box-shadow: 0 25px 30px -5px rgba(99,102,241,0.3); }\n\
}";

pub fn play(el: &HtmlElement, effect: TransientStyle) {
    set(el, effect.property, effect.active);
    let el = el.clone();
    Timeout::new(effect.reset_after_ms, move || {
        set(&el, effect.property, effect.rest);
    })
    .forget();
}

fn set(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        log::warn!("could not set {} to {:?}: {:?}", property, value, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_bump_timings() {
        assert_eq!(PRESS.reset_after_ms, 150);
        assert_eq!(PRESS.active, "scale(0.95)");
        assert_eq!(PRICE_BUMP.reset_after_ms, 200);
        assert_eq!(PRICE_BUMP.rest, "scale(1)");
        assert_eq!(PULSE.reset_after_ms, 500);
    }

    #[test]
    fn pulse_keyframes_match_animation_name() {
        assert!(PULSE_KEYFRAMES.starts_with("@keyframes pulse"));
        assert!(PULSE.active.starts_with("pulse "));
    }
}
