use web_sys::{Element, HtmlElement, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::motion::effects::{self, PRESS, PRICE_BUMP};
use crate::motion::observer::RevealHandle;
use crate::pricing::plans::{BillingCycle, Currency, Plan};

const FEATURED_HOVER_SHADOW: &str = "0 25px 50px -12px rgba(99, 102, 241, 0.25)";
const FEATURED_REST_SHADOW: &str = "var(--shadow-lg)";

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub plans: Vec<Plan>,
    pub currency: Currency,
    pub reveal: RevealHandle,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let cycle = use_state(|| BillingCycle::Monthly);
    let price_refs = {
        let count = props.plans.len();
        use_state(move || (0..count).map(|_| NodeRef::default()).collect::<Vec<_>>())
    };

    let onchange = {
        let cycle = cycle.clone();
        let price_refs = price_refs.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let next = BillingCycle::from_toggle(input.checked());
            log::debug!("billing cycle switched to {:?}", next);
            cycle.set(next);
            for price in price_refs.iter().filter_map(|r| r.cast::<HtmlElement>()) {
                effects::play(&price, PRICE_BUMP);
            }
        })
    };

    html! {
        <div class="pricing-plans">
            <div class="billing-toggle">
                <span class={classes!((*cycle == BillingCycle::Monthly).then_some("active"))}>{"Monthly"}</span>
                <label class="switch">
                    <input id="billingToggle" type="checkbox" checked={*cycle == BillingCycle::Annual} {onchange} />
                    <span class="slider"></span>
                </label>
                <span class={classes!((*cycle == BillingCycle::Annual).then_some("active"))}>
                    {"Annual"}
                    <span class="save-badge">{"Save 20%"}</span>
                </span>
            </div>
            <div class="pricing-grid">
                { for props.plans.iter().zip(price_refs.iter()).map(|(plan, price_ref)| html! {
                    <PricingCard
                        key={plan.name.clone()}
                        plan={plan.clone()}
                        price={props.currency.format(plan.price(*cycle))}
                        price_ref={price_ref.clone()}
                        reveal={props.reveal.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
    pub price: String,
    pub price_ref: NodeRef,
    pub reveal: RevealHandle,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let card_ref = use_node_ref();
    let cta_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        let reveal = props.reveal.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(card) = card_ref.cast::<Element>() {
                    reveal.observe(&card);
                }
                || ()
            },
            (),
        );
    }

    let on_cta = {
        let cta_ref = cta_ref.clone();
        let name = props.plan.display_name().to_string();
        Callback::from(move |_: MouseEvent| {
            if let Some(cta) = cta_ref.cast::<HtmlElement>() {
                effects::play(&cta, PRESS);
            }
            gloo_console::log!("Pricing CTA clicked:", name.clone());
        })
    };

    let set_shadow = |shadow: &'static str| {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().set_property("box-shadow", shadow);
            }
        })
    };
    let (onmouseenter, onmouseleave) = if props.plan.featured {
        (
            Some(set_shadow(FEATURED_HOVER_SHADOW)),
            Some(set_shadow(FEATURED_REST_SHADOW)),
        )
    } else {
        (None, None)
    };

    let plan = &props.plan;
    html! {
        <div
            ref={card_ref}
            class={classes!("pricing-card", plan.featured.then_some("featured"))}
            {onmouseenter}
            {onmouseleave}
        >
            if plan.featured {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <h3>{&plan.name}</h3>
            <p class="plan-tagline">{&plan.tagline}</p>
            <div class="price">
                <span ref={props.price_ref.clone()} class="price-amount">{&props.price}</span>
                <span class="price-period">{"/month"}</span>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{feature}</li> }) }
            </ul>
            <button ref={cta_ref} class="pricing-cta" onclick={on_cta}>{&plan.cta}</button>
        </div>
    }
}
