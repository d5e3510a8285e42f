use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::dashboard::cards::{self, StatTile, WidgetCard};
use crate::dashboard::templates::TemplateRegistry;

pub const VIEW_MODES: [&str; 3] = ["Overview", "Analytics", "Reports"];
pub const DEFAULT_TEAM_SIZE: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct DashboardPreviewProps {
    pub registry: Rc<TemplateRegistry>,
}

/// Industry picker plus the rendered preview cards.
///
/// Team size and view mode are shown back to the visitor but the cards
/// depend only on the selected industry.
#[function_component(DashboardPreview)]
pub fn dashboard_preview(props: &DashboardPreviewProps) -> Html {
    let industry = {
        let default_key = props.registry.default_key().to_string();
        use_state(move || default_key)
    };
    let team_size = use_state(|| DEFAULT_TEAM_SIZE);
    let view_mode = use_state(|| 0usize);

    let on_industry = {
        let industry = industry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            industry.set(select.value());
        })
    };

    let on_team_size = {
        let team_size = team_size.clone();
        Callback::from(move |e: InputEvent| {
            let slider: HtmlInputElement = e.target_unchecked_into();
            match slider.value().parse::<u32>() {
                Ok(size) => team_size.set(size),
                Err(_) => log::warn!("ignoring team size {:?}", slider.value()),
            }
        })
    };

    let (key, template) = props.registry.resolve(Some(industry.as_str()));
    let cards = cards::project(key, template);
    log::debug!("rendering {} preview cards for {}", cards.len(), key);

    html! {
        <div class="config-wizard">
            <div class="wizard-controls">
                <label for="industrySelect">{"Industry"}</label>
                <select id="industrySelect" onchange={on_industry}>
                    { for props.registry.iter().map(|(option_key, option)| html! {
                        <option value={option_key.to_string()} selected={option_key == key}>
                            {&option.title}
                        </option>
                    }) }
                </select>

                <label for="teamSizeSlider">
                    {"Team size: "}
                    <span id="teamSizeValue">{team_size.to_string()}</span>
                </label>
                <input
                    id="teamSizeSlider"
                    type="range"
                    min="1"
                    max="100"
                    value={team_size.to_string()}
                    oninput={on_team_size}
                />

                <div class="view-toggle">
                    { for VIEW_MODES.iter().enumerate().map(|(i, mode)| {
                        let active = *view_mode == i;
                        let onclick = {
                            let view_mode = view_mode.clone();
                            Callback::from(move |_: MouseEvent| view_mode.set(i))
                        };
                        html! {
                            <button class={classes!("toggle-btn", active.then_some("active"))} {onclick}>
                                {*mode}
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div id="dashboardContent" class="dashboard-content">
                { for cards.iter().map(render_card) }
            </div>
        </div>
    }
}

fn render_card(card: &WidgetCard) -> Html {
    html! {
        <div key={card.key.clone()} class="dashboard-widget" style={format!("animation-delay: {}", card.animation_delay())}>
            <h4>{&card.title}</h4>
            <p>{&card.description}</p>
            <div class="widget-grid">
                { for card.tiles.iter().map(render_tile) }
            </div>
        </div>
    }
}

fn render_tile(tile: &StatTile) -> Html {
    html! {
        <div class="widget-stat">
            <div class="widget-stat-value">{&tile.value}</div>
            <div class="widget-stat-label">{&tile.label}</div>
        </div>
    }
}
