use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod interactions {
    pub mod controller;
    pub mod error;
    pub mod forms;
    pub mod inflight;
    pub mod nav;
    pub mod order;
    pub mod phone;
    pub mod pricing;
    pub mod reveal;
    pub mod services;
    pub mod toast;
    pub mod tracking;
}
mod components {
    pub mod contact;
    pub mod nav;
    pub mod notification;
    pub mod pricing;
    pub mod schedule;
    pub mod services;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
