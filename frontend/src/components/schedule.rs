use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::interactions::controller::{PhoneField, UiEvent};
use crate::interactions::forms::{date_value, ScheduleField, ScheduleForm};
use crate::interactions::services::SERVICE_CHOICES;
use crate::interactions::tracking::{is_submit_key, TrackingPanel};

const TIME_SLOTS: [(&str, &str); 5] = [
    ("08-10", "8:00 AM - 10:00 AM"),
    ("10-12", "10:00 AM - 12:00 PM"),
    ("12-14", "12:00 PM - 2:00 PM"),
    ("14-16", "2:00 PM - 4:00 PM"),
    ("16-18", "4:00 PM - 6:00 PM"),
];

fn on_input(on_event: &Callback<UiEvent>, field: ScheduleField) -> Callback<InputEvent> {
    let on_event = on_event.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_event.emit(UiEvent::EditSchedule(field, input.value()));
    })
}

fn on_select(on_event: &Callback<UiEvent>, field: ScheduleField) -> Callback<Event> {
    let on_event = on_event.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_event.emit(UiEvent::EditSchedule(field, select.value()));
    })
}

/// What a select offering `choices` should show for `value`. Anything it
/// doesn't offer falls back to the empty placeholder.
fn shown_option<'a>(value: &'a str, choices: &[(&str, &str)]) -> &'a str {
    if choices.iter().any(|(choice, _)| *choice == value) {
        value
    } else {
        ""
    }
}

/// Keeps a `<select>` on `value`. The `selected` attribute stops applying
/// once the user has picked an option by hand, so the value is set directly.
#[hook]
fn use_synced_select(value: &str) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |value: &String| {
                if let Some(select) = node.cast::<HtmlSelectElement>() {
                    select.set_value(value);
                }
                || ()
            },
            value.to_string(),
        );
    }
    node
}

#[derive(Properties, PartialEq)]
pub struct ScheduleProps {
    pub form: ScheduleForm,
    pub today: NaiveDate,
    pub pending: bool,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Schedule)]
pub fn schedule(props: &ScheduleProps) -> Html {
    let ScheduleProps { form, today, pending, on_event } = props;

    let onsubmit = {
        let on_event = on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::SubmitSchedule);
        })
    };

    let time_ref = use_synced_select(shown_option(&form.time, &TIME_SLOTS));
    let service_ref = use_synced_select(shown_option(&form.service, &SERVICE_CHOICES));

    let on_phone = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::PhoneInput(PhoneField::Schedule, input.value()));
        })
    };

    let on_notes = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_event.emit(UiEvent::EditSchedule(ScheduleField::Notes, input.value()));
        })
    };

    html! {
        <section id={config::SCHEDULE_SECTION_ID} class="schedule">
            <div class="container">
                <div class="section-header">
                    <h2>{"Schedule a Pickup"}</h2>
                    <p>{"Tell us where and when. We'll take it from there."}</p>
                </div>
                <form id="schedule-form" class="schedule-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="name">{"Full Name *"}</label>
                            <input type="text" id="name" name="name" value={form.name.clone()}
                                oninput={on_input(on_event, ScheduleField::Name)} />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone Number *"}</label>
                            <input type="tel" id="phone" name="phone" placeholder="98765 43210"
                                value={form.phone.clone()} oninput={on_phone} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="address">{"Pickup Address *"}</label>
                        <input type="text" id="address" name="address" value={form.address.clone()}
                            oninput={on_input(on_event, ScheduleField::Address)} />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="date">{"Pickup Date *"}</label>
                            <input type="date" id="date" name="date" min={date_value(*today)}
                                value={form.date.clone()} oninput={on_input(on_event, ScheduleField::Date)} />
                        </div>
                        <div class="form-group">
                            <label for="time">{"Time Slot *"}</label>
                            <select id="time" name="time" ref={time_ref}
                                onchange={on_select(on_event, ScheduleField::Time)}>
                                <option value="">{"Select a slot"}</option>
                                { for TIME_SLOTS.iter().map(|(value, label)| html! {
                                    <option value={*value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="service">{"Service *"}</label>
                        <select id="service" name="service" ref={service_ref}
                            onchange={on_select(on_event, ScheduleField::Service)}>
                            <option value="">{"Select a service"}</option>
                            { for SERVICE_CHOICES.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="notes">{"Special Instructions"}</label>
                        <textarea id="notes" name="notes" rows="3" value={form.notes.clone()} oninput={on_notes} />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*pending}>
                        {
                            if *pending {
                                html! { <><i class="fas fa-spinner fa-spin"></i>{" Booking..."}</> }
                            } else {
                                html! { <><i class="fas fa-calendar-check"></i>{" Schedule Pickup"}</> }
                            }
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrackingProps {
    pub panel: TrackingPanel,
    pub pending: bool,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Tracking)]
pub fn tracking(props: &TrackingProps) -> Html {
    let TrackingProps { panel, pending, on_event } = props;

    let oninput = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::EditTracking(input.value()));
        })
    };

    let onkeypress = {
        let on_event = on_event.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_submit_key(&e.key()) {
                e.prevent_default();
                on_event.emit(UiEvent::TrackOrder);
            }
        })
    };

    let onclick = {
        let on_event = on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::TrackOrder))
    };

    let header = panel
        .result_header
        .clone()
        .unwrap_or_else(|| "Order #CD-00000".to_string());

    html! {
        <section id="track" class="track">
            <div class="container">
                <div class="section-header">
                    <h2>{"Track Your Order"}</h2>
                    <p>{"Enter the order ID from your booking confirmation."}</p>
                </div>
                <div class="track-form">
                    <input type="text" id="order-id" placeholder="e.g. CD-7QK2Z"
                        value={panel.input.clone()} oninput={oninput} onkeypress={onkeypress} />
                    <button id="track-btn" class="btn btn-primary" disabled={*pending} onclick={onclick}>
                        {
                            if *pending {
                                html! { <i class="fas fa-spinner fa-spin"></i> }
                            } else {
                                html! { <><i class="fas fa-search"></i>{" Track"}</> }
                            }
                        }
                    </button>
                </div>
                <div id={config::TRACK_RESULT_ID}
                    class={classes!("track-result", panel.result_header.is_none().then(|| "hidden"))}>
                    <div class="order-header">
                        <h4>{header}</h4>
                        <span class="status-badge">{"In Progress"}</span>
                    </div>
                    <div class="timeline">
                        <div class="timeline-item completed"><i class="fas fa-check-circle"></i>{" Picked up"}</div>
                        <div class="timeline-item completed"><i class="fas fa-check-circle"></i>{" Washing"}</div>
                        <div class="timeline-item active"><i class="fas fa-spinner"></i>{" Ironing"}</div>
                        <div class="timeline-item"><i class="far fa-circle"></i>{" Out for delivery"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::services::service_option;

    #[test]
    fn offered_values_are_shown_as_is() {
        assert_eq!(shown_option("dry-clean", &SERVICE_CHOICES), "dry-clean");
        assert_eq!(shown_option("10-12", &TIME_SLOTS), "10-12");
    }

    #[test]
    fn cleared_or_unknown_values_show_the_placeholder() {
        assert_eq!(shown_option("", &SERVICE_CHOICES), "");
        assert_eq!(shown_option("ironing", &SERVICE_CHOICES), "");
        assert_eq!(shown_option("morning", &TIME_SLOTS), "");
    }

    #[test]
    fn service_cards_land_on_an_offered_option() {
        for title in ["Wash & Fold", "Dry Cleaning", "Stain Removal", "Shoe Cleaning"] {
            let option = service_option(title).unwrap();
            assert_eq!(shown_option(option, &SERVICE_CHOICES), option, "{}", title);
        }
    }
}
