use log::Level;
use web_sys::window;

use crate::motion::strategy::MotionStrategy;
use crate::pricing::plans::Currency;

pub const THEME_STORAGE_KEY: &str = "theme";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const NAV_SCROLLED_AFTER_PX: f64 = 100.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

pub const PRESS_RESET_MS: u32 = 150;
pub const PRICE_BUMP_RESET_MS: u32 = 200;
pub const PULSE_RESET_MS: u32 = 500;
pub const PAGE_FADE_IN_DELAY_MS: u32 = 100;
pub const HERO_START_DELAY_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Startup settings read from the `data-*` attributes of `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub motion: MotionStrategy,
    pub currency: Currency,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            motion: MotionStrategy::Native,
            currency: Currency::Rupee,
        }
    }
}

impl AppConfig {
    pub fn from_attributes(motion: Option<&str>, currency: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            motion: motion
                .and_then(MotionStrategy::parse)
                .unwrap_or(defaults.motion),
            currency: currency
                .and_then(Currency::parse)
                .unwrap_or(defaults.currency),
        }
    }

    /// Reads `data-motion` and `data-currency` off the document body.
    pub fn from_document() -> Self {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());

        match body {
            Some(body) => {
                let data = body.dataset();
                let motion = data.get("motion");
                let currency = data.get("currency");
                Self::from_attributes(motion.as_deref(), currency.as_deref())
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(AppConfig::from_attributes(None, None), AppConfig::default());
    }

    #[test]
    fn attributes_select_strategy_and_currency() {
        let config = AppConfig::from_attributes(Some("timeline"), Some("usd"));
        assert_eq!(config.motion, MotionStrategy::Timeline);
        assert_eq!(config.currency, Currency::Dollar);
    }

    #[test]
    fn unrecognised_values_fall_back() {
        let config = AppConfig::from_attributes(Some("gsap-ish"), Some("eur"));
        assert_eq!(config, AppConfig::default());
    }
}
