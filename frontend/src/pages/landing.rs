use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::components::contact::Contact;
use crate::components::nav::{anchor_click, BackToTop, Nav};
use crate::components::notification::Notification;
use crate::components::pricing::Pricing;
use crate::components::schedule::{Schedule, Tracking};
use crate::components::services::{HowItWorks, Services, Testimonials};
use crate::config;
use crate::dom;
use crate::interactions::controller::{Effect, UiController, UiEvent};
use crate::interactions::reveal::{OBSERVED_SELECTOR, REVEAL_KEY_ATTR};

/// Feeds events into the controller and carries out what comes back.
#[derive(Clone)]
struct Dispatcher {
    controller: Rc<RefCell<UiController>>,
    redraw: UseForceUpdateHandle,
}

impl Dispatcher {
    fn dispatch(&self, event: UiEvent) {
        let outcome = self.controller.borrow_mut().handle(event);
        if outcome.changed {
            self.redraw.force_update();
        }
        for effect in outcome.effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::Schedule { delay_ms, event } => {
                let dispatcher = self.clone();
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    dispatcher.dispatch(event);
                });
            }
            Effect::ScrollToTop => dom::scroll_to_top(),
            Effect::ScrollIntoView { target, block } => {
                // Wait for the re-render so a block that was just unhidden has a layout.
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    dom::scroll_into_view(&target, block);
                });
            }
        }
    }
}

fn observe_reveals(callback: &Closure<dyn FnMut(js_sys::Array)>) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Scroll reveal disabled: {:?}", e);
                return None;
            }
        };

    let document = web_sys::window()?.document()?;
    if let Ok(nodes) = document.query_selector_all(OBSERVED_SELECTOR) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }
    Some(observer)
}

const PAGE_CSS: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
    .hidden {
        display: none !important;
    }
    .notification {
        position: fixed;
        top: 100px;
        right: 20px;
        max-width: 400px;
        padding: 16px 20px;
        border-radius: 12px;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
        z-index: 9999;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 16px;
    }
    .notification-content {
        display: flex;
        align-items: center;
        gap: 12px;
    }
    .notification-close {
        background: none;
        border: none;
        cursor: pointer;
        color: inherit;
        opacity: 0.7;
        font-size: 1rem;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let controller = use_mut_ref(UiController::new);
    let redraw = use_force_update();
    let dispatcher = Dispatcher {
        controller: controller.clone(),
        redraw,
    };

    // Scroll listener for navbar style, section highlight and back-to-top
    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dispatcher = dispatcher.clone();
                        move || dispatcher.dispatch(UiEvent::Scrolled(dom::scroll_snapshot()))
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for scroll: {:?}", e);
                    }
                    // Initial call, the page may load already scrolled
                    dispatcher.dispatch(UiEvent::Scrolled(dom::scroll_snapshot()));
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Fade cards in the first time they scroll into view
    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        if let Some(key) = entry.target().get_attribute(REVEAL_KEY_ATTR) {
                            dispatcher.dispatch(UiEvent::Revealed(key));
                        }
                    }
                });
                let observer = observe_reveals(&callback);
                info!("Chhota Dhobhi website initialized");
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_unmount(move || controller.borrow_mut().cancel_pending());
    }

    let on_event = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |event: UiEvent| dispatcher.dispatch(event))
    };

    let model = controller.borrow().model().clone();

    html! {
        <>
            <style>{PAGE_CSS}</style>
            <Nav
                menu_open={model.menu_open}
                scrolled={model.navbar_scrolled}
                active_section={model.active_section.clone()}
                on_event={on_event.clone()}
            />
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1>{"Fresh Laundry, Delivered to Your Door"}</h1>
                    <p>{"Chhota Dhobhi picks up, cleans and delivers within 48 hours. No queues, no hassle."}</p>
                    <div class="hero-buttons">
                        <a href="#schedule" class="btn btn-primary"
                            onclick={anchor_click(&on_event, "#schedule".to_string())}>
                            {"Schedule Pickup"}
                        </a>
                        <a href="#pricing" class="btn btn-secondary"
                            onclick={anchor_click(&on_event, "#pricing".to_string())}>
                            {"View Pricing"}
                        </a>
                    </div>
                </div>
            </section>
            <Services revealed={model.revealed.clone()} on_event={on_event.clone()} />
            <HowItWorks revealed={model.revealed.clone()} />
            <Pricing
                view={model.pricing_view}
                revealed={model.revealed.clone()}
                on_event={on_event.clone()}
            />
            <Schedule
                form={model.schedule.clone()}
                today={model.today}
                pending={model.schedule_request.is_pending()}
                on_event={on_event.clone()}
            />
            <Tracking
                panel={model.tracking.clone()}
                pending={model.tracking_request.is_pending()}
                on_event={on_event.clone()}
            />
            <Testimonials revealed={model.revealed.clone()} />
            <Contact
                form={model.contact.clone()}
                pending={model.contact_request.is_pending()}
                on_event={on_event.clone()}
            />
            <footer class="footer">
                <div class="container">
                    <p>{"© Chhota Dhobhi. Clean clothes, happy you."}</p>
                    <a href="#" class="footer-top">{"Top"}</a>
                </div>
            </footer>
            <BackToTop visible={model.back_to_top_visible} on_event={on_event.clone()} />
            <Notification toast={model.toast.current().cloned()} on_event={on_event} />
        </>
    }
}
