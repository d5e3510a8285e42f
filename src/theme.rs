use web_sys::{window, Element, MouseEvent, Storage};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// A stored "dark" wins; with nothing stored the system preference decides.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            None if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn root_element() -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Theme currently shown on the page.
pub fn current() -> Theme {
    let value = root_element().and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    Theme::from_attribute(value.as_deref())
}

pub fn apply(theme: Theme) {
    if let Some(root) = root_element() {
        let result = match theme {
            Theme::Dark => root.set_attribute(THEME_ATTRIBUTE, "dark"),
            Theme::Light => root.remove_attribute(THEME_ATTRIBUTE),
        };
        if let Err(e) = result {
            log::warn!("could not apply {} theme: {:?}", theme.as_str(), e);
        }
    }

    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                log::warn!("could not store theme preference: {:?}", e);
            }
        }
        None => log::debug!("local storage unavailable, theme not persisted"),
    }
}

/// Applies the stored or preferred theme. Runs once at startup.
pub fn init() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let theme = Theme::initial(stored.as_deref(), prefers_dark());
    apply(theme);
    log::debug!("initial theme: {}", theme.as_str());
    theme
}

pub fn toggle() -> Theme {
    let next = current().toggled();
    apply(next);
    next
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(current);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(toggle());
        })
    };

    let (icon, label) = match *theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        Theme::Light => ("🌙", "Switch to dark mode"),
    };

    html! {
        <button id="darkToggle" class="theme-toggle" aria-label={label} {onclick}>
            {icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_dark_wins() {
        assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::initial(Some("dark"), true), Theme::Dark);
    }

    #[test]
    fn stored_light_overrides_system_preference() {
        assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
    }

    #[test]
    fn nothing_stored_follows_system_preference() {
        assert_eq!(Theme::initial(None, true), Theme::Dark);
        assert_eq!(Theme::initial(None, false), Theme::Light);
    }

    #[test]
    fn unexpected_stored_value_means_light() {
        assert_eq!(Theme::initial(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn toggling_flips_and_round_trips_through_attribute() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some(Theme::Dark.as_str())), Theme::Dark);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }
}
