use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::interactions::controller::{PhoneField, UiEvent};
use crate::interactions::forms::{ContactField, ContactForm};

fn on_input(on_event: &Callback<UiEvent>, field: ContactField) -> Callback<InputEvent> {
    let on_event = on_event.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_event.emit(UiEvent::EditContact(field, input.value()));
    })
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub form: ContactForm,
    pub pending: bool,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ContactProps { form, pending, on_event } = props;

    let onsubmit = {
        let on_event = on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::SubmitContact);
        })
    };

    let on_phone = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::PhoneInput(PhoneField::Contact, input.value()));
        })
    };

    let on_message = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_event.emit(UiEvent::EditContact(ContactField::Message, input.value()));
        })
    };

    html! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2>{"Get in Touch"}</h2>
                    <p><i class="fas fa-map-marker-alt"></i>{" 27, 5th Cross, Koramangala, Bengaluru"}</p>
                    <p><i class="fas fa-phone"></i>{" +91 98765 43210"}</p>
                    <p><i class="fas fa-envelope"></i>{" hello@chhotadhobhi.in"}</p>
                    <p><i class="fas fa-clock"></i>{" Mon - Sat, 8:00 AM - 8:00 PM"}</p>
                </div>
                <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <input type="text" name="name" placeholder="Your Name *" value={form.name.clone()}
                            oninput={on_input(on_event, ContactField::Name)} />
                        <input type="email" name="email" placeholder="Your Email *" value={form.email.clone()}
                            oninput={on_input(on_event, ContactField::Email)} />
                    </div>
                    <div class="form-row">
                        <input type="tel" name="phone" placeholder="Phone" value={form.phone.clone()}
                            oninput={on_phone} />
                        <input type="text" name="subject" placeholder="Subject" value={form.subject.clone()}
                            oninput={on_input(on_event, ContactField::Subject)} />
                    </div>
                    <textarea name="message" rows="5" placeholder="Your Message *" value={form.message.clone()}
                        oninput={on_message} />
                    <button type="submit" class="btn btn-primary" disabled={*pending}>
                        {
                            if *pending {
                                html! { <><i class="fas fa-spinner fa-spin"></i>{" Sending..."}</> }
                            } else {
                                html! { <><i class="fas fa-paper-plane"></i>{" Send Message"}</> }
                            }
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
