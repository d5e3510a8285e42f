use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const MONTHLY_BARS: [u8; 5] = [45, 65, 55, 75, 60];
pub const WEEKLY_BARS: [u8; 5] = [60, 80, 45, 90, 70];

pub fn bar_heights(monthly: bool) -> [u8; 5] {
    if monthly {
        MONTHLY_BARS
    } else {
        WEEKLY_BARS
    }
}

#[function_component(AnalyticsPreview)]
pub fn analytics_preview() -> Html {
    let monthly = use_state(|| false);

    let onchange = {
        let monthly = monthly.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            monthly.set(input.checked());
        })
    };

    html! {
        <div class="analytics-preview">
            <label class="analytics-toggle">
                <span>{"Weekly"}</span>
                <input id="analyticsToggle" type="checkbox" checked={*monthly} {onchange} />
                <span>{"Monthly"}</span>
            </label>
            <div class="chart-bars">
                { for bar_heights(*monthly).iter().map(|height| html! {
                    <div class="bar" style={format!("height: {}%", height)}></div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_shows_monthly_bars() {
        assert_eq!(bar_heights(true), [45, 65, 55, 75, 60]);
        assert_eq!(bar_heights(false), [60, 80, 45, 90, 70]);
    }
}
