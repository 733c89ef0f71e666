use yew::prelude::*;

use crate::interactions::controller::UiEvent;
use crate::interactions::pricing::{is_hidden, PlanCategory, PricingView};
use crate::interactions::reveal::RevealSet;

struct Plan {
    key: &'static str,
    name: &'static str,
    category: PlanCategory,
    price: &'static str,
    period: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: [Plan; 6] = [
    Plan {
        key: "basic",
        name: "Basic",
        category: PlanCategory::Individual,
        price: "₹60",
        period: "/kg",
        features: &["Wash & Fold", "48-hour turnaround", "Free pickup over 5kg"],
        featured: false,
    },
    Plan {
        key: "premium",
        name: "Premium",
        category: PlanCategory::Individual,
        price: "₹90",
        period: "/kg",
        features: &["Wash & Iron", "24-hour turnaround", "Free pickup & delivery"],
        featured: true,
    },
    Plan {
        key: "express",
        name: "Express",
        category: PlanCategory::Individual,
        price: "₹120",
        period: "/kg",
        features: &["Wash & Iron", "Same-day delivery", "Priority handling"],
        featured: false,
    },
    Plan {
        key: "student",
        name: "Student",
        category: PlanCategory::Subscription,
        price: "₹999",
        period: "/month",
        features: &["Up to 15kg per month", "Weekly pickup", "Wash & Fold"],
        featured: false,
    },
    Plan {
        key: "family",
        name: "Family",
        category: PlanCategory::Subscription,
        price: "₹2,499",
        period: "/month",
        features: &["Up to 40kg per month", "Twice-weekly pickup", "Wash & Iron", "2 dry-clean items"],
        featured: true,
    },
    Plan {
        key: "business",
        name: "Business",
        category: PlanCategory::Subscription,
        price: "₹4,999",
        period: "/month",
        features: &["Up to 100kg per month", "Daily pickup", "Dedicated account manager"],
        featured: false,
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub view: PricingView,
    pub revealed: RevealSet,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let subscription = props.view.is_subscription();

    let toggle = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::TogglePricing))
    };

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                </div>
                <div class="pricing-toggle-wrapper">
                    <span class={classes!("toggle-label", (!subscription).then(|| "active"))}>{"Pay per Order"}</span>
                    <button
                        id="pricing-toggle"
                        class={classes!("toggle-switch", subscription.then(|| "active"))}
                        aria-label="Switch between pay-per-order and subscription pricing"
                        onclick={toggle}
                    >
                        <span class="toggle-knob"></span>
                    </button>
                    <span class={classes!("toggle-label", subscription.then(|| "active"))}>{"Monthly Plans"}</span>
                </div>
                <div class="pricing-grid">
                    { for PLANS.iter().map(|plan| {
                        let reveal_key = format!("plan-{}", plan.key);
                        let class = classes!(
                            "pricing-card",
                            plan.featured.then(|| "featured"),
                            is_hidden(props.view, plan.category).then(|| "hidden"),
                            props.revealed.class(&reveal_key)
                        );
                        let choose = {
                            let on_event = props.on_event.clone();
                            let name = plan.name;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_event.emit(UiEvent::PlanSelected(name.to_string()));
                            })
                        };
                        html! {
                            <div class={class} data-category={plan.category.as_str()} data-reveal-key={reveal_key}>
                                <h3>{plan.name}</h3>
                                <div class="price">
                                    <span class="amount">{plan.price}</span>
                                    <span class="period">{plan.period}</span>
                                </div>
                                <ul class="features">
                                    { for plan.features.iter().map(|feature| html! {
                                        <li><i class="fas fa-check"></i>{" "}{*feature}</li>
                                    }) }
                                </ul>
                                <a href="#schedule" class="btn btn-primary" onclick={choose}>{"Choose Plan"}</a>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
