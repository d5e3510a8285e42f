use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_SCROLLED_AFTER_PX;
use crate::theme::ThemeToggle;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Features", href: "#features" },
        NavLink { label: "How it works", href: "#how-it-works" },
        NavLink { label: "Pricing", href: "#pricing" },
        NavLink { label: "Testimonials", href: "#testimonials" },
    ]
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Value for `body.style.overflow` so the page can't scroll behind the menu.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    pub fn class(self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

fn lock_body_scroll(state: MenuState) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let result = match state.body_overflow() {
            "" => style.remove_property("overflow").map(|_| ()),
            value => style.set_property("overflow", value),
        };
        if let Err(e) = result {
            log::warn!("could not update body overflow: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
    #[prop_or_else(default_links)]
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = use_state_eq(MenuState::default);
    let nav_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    {
        let menu = *menu;
        use_effect_with_deps(
            move |state| {
                lock_body_scroll(*state);
                || ()
            },
            menu,
        );
    }

    {
        let menu = menu.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            menu.set(MenuState::closed());
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // Anchor scrolling itself is handled by the page-wide listener.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MenuState::closed());
        })
    };

    html! {
        <nav ref={nav_ref} class={classes!("navbar", is_scrolled(scroll_y).then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#" class="nav-logo">{props.brand.clone()}</a>

                <ul id="navLinks" class={classes!("nav-links", menu.class())}>
                    { for props.links.iter().map(|link| html! {
                        <li>
                            <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                        </li>
                    }) }
                </ul>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        id="mobileMenuToggle"
                        class={classes!("mobile-menu-toggle", menu.class())}
                        aria-label="Toggle navigation"
                        aria-expanded={menu.open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.open);
        assert!(menu.toggled().open);
        assert!(!menu.toggled().toggled().open);
    }

    #[test]
    fn open_menu_locks_body_scroll() {
        assert_eq!(MenuState { open: true }.body_overflow(), "hidden");
        assert_eq!(MenuState::closed().body_overflow(), "");
    }

    #[test]
    fn active_class_only_while_open() {
        assert_eq!(MenuState { open: true }.class(), Some("active"));
        assert_eq!(MenuState::closed().class(), None);
    }

    #[test]
    fn scrolled_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(101.0));
    }

    #[test]
    fn default_links_are_in_page_anchors() {
        assert!(default_links().iter().all(|link| link.href.starts_with('#')));
    }
}
