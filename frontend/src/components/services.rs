use yew::prelude::*;

use crate::interactions::controller::UiEvent;
use crate::interactions::reveal::RevealSet;

struct Service {
    key: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    from_price: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        key: "wash-fold",
        icon: "fa-soap",
        title: "Wash & Fold",
        blurb: "Everyday clothes washed, dried and neatly folded.",
        from_price: "₹60/kg",
    },
    Service {
        key: "dry-cleaning",
        icon: "fa-user-tie",
        title: "Dry Cleaning",
        blurb: "Suits, silks and delicates handled with care.",
        from_price: "₹150/piece",
    },
    Service {
        key: "wash-iron",
        icon: "fa-tshirt",
        title: "Wash & Iron",
        blurb: "Washed and crisply pressed, ready to wear.",
        from_price: "₹90/kg",
    },
    Service {
        key: "stain-removal",
        icon: "fa-magic",
        title: "Stain Removal",
        blurb: "Targeted treatment for curry, ink and grease.",
        from_price: "₹50/stain",
    },
    Service {
        key: "bedding",
        icon: "fa-bed",
        title: "Bedding & Linens",
        blurb: "Sheets, duvets and curtains, fresh and sanitised.",
        from_price: "₹120/set",
    },
    Service {
        key: "shoes",
        icon: "fa-shoe-prints",
        title: "Shoe Cleaning",
        blurb: "Sneakers and leather shoes cleaned and deodorised.",
        from_price: "₹200/pair",
    },
];

const STEPS: [(&str, &str, &str); 4] = [
    ("fa-calendar-alt", "Schedule", "Pick a date and time slot that suits you."),
    ("fa-truck", "Pickup", "We collect your laundry from your doorstep."),
    ("fa-water", "Clean", "Expert washing, drying and pressing."),
    ("fa-box-open", "Deliver", "Fresh clothes back at your door in 48 hours."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Priya S.", "Koramangala", "Pickup was on time and my kurtas came back spotless."),
    ("Arjun M.", "Indiranagar", "The monthly plan saves me every weekend. Totally worth it."),
    ("Fatima K.", "HSR Layout", "They got a wine stain out of my favourite saree!"),
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub revealed: RevealSet,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Tap a service to book it straight away."}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let reveal_key = format!("service-{}", service.key);
                        let class = classes!("service-card", props.revealed.class(&reveal_key));
                        let onclick = {
                            let on_event = props.on_event.clone();
                            let title = service.title;
                            Callback::from(move |_: MouseEvent| {
                                on_event.emit(UiEvent::ServiceCardClicked(title.to_string()))
                            })
                        };
                        html! {
                            <div
                                class={class}
                                data-reveal-key={reveal_key}
                                style="cursor: pointer;"
                                onclick={onclick}
                            >
                                <div class="service-icon"><i class={classes!("fas", service.icon)}></i></div>
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                                <span class="service-price">{"From "}{service.from_price}</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealOnlyProps {
    pub revealed: RevealSet,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &RevealOnlyProps) -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <h2>{"How It Works"}</h2>
                </div>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (icon, title, text))| {
                        let reveal_key = format!("step-{}", i + 1);
                        let class = classes!("step", props.revealed.class(&reveal_key));
                        html! {
                            <div class={class} data-reveal-key={reveal_key}>
                                <div class="step-number">{(i + 1).to_string()}</div>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &RevealOnlyProps) -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2>{"What Our Customers Say"}</h2>
                </div>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, (name, area, quote))| {
                        let reveal_key = format!("testimonial-{}", i + 1);
                        let class = classes!("testimonial-card", props.revealed.class(&reveal_key));
                        html! {
                            <div class={class} data-reveal-key={reveal_key}>
                                <div class="stars">{ for (0..5).map(|_| html! { <i class="fas fa-star"></i> }) }</div>
                                <p class="quote">{"\u{201c}"}{*quote}{"\u{201d}"}</p>
                                <div class="author">
                                    <strong>{*name}</strong>
                                    <span>{*area}</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
