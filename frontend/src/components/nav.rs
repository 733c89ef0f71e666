use yew::prelude::*;

use crate::interactions::controller::UiEvent;
use crate::interactions::nav::anchor_target;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("pricing", "Pricing"),
    ("schedule", "Schedule Pickup"),
    ("track", "Track Order"),
    ("contact", "Contact"),
];

/// Click handler for any in-page `#id` link.
pub fn anchor_click(on_event: &Callback<UiEvent>, href: String) -> Callback<MouseEvent> {
    let on_event = on_event.clone();
    Callback::from(move |e: MouseEvent| {
        if anchor_target(&href).is_some() {
            e.prevent_default();
        }
        on_event.emit(UiEvent::AnchorClicked(href.clone()));
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Option<String>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, scrolled, active_section, on_event } = props;

    let toggle_menu = {
        let on_event = on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::ToggleMenu);
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={anchor_click(on_event, "#home".to_string())}>
                    <i class="fas fa-tshirt"></i>
                    {" Chhota Dhobhi"}
                </a>
                <ul id="nav-menu" class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let href = format!("#{}", id);
                        let is_active = active_section.as_deref() == Some(*id);
                        let onclick = {
                            let on_event = on_event.clone();
                            let scroll = anchor_click(&on_event, href.clone());
                            Callback::from(move |e: MouseEvent| {
                                on_event.emit(UiEvent::CloseMenu);
                                scroll.emit(e);
                            })
                        };
                        html! {
                            <li>
                                <a href={href} class={classes!("nav-link", is_active.then(|| "active"))} onclick={onclick}>
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    id="nav-toggle"
                    class={classes!("nav-toggle", menu_open.then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub on_event: Callback<UiEvent>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::BackToTop))
    };

    html! {
        <button
            id="back-to-top"
            class={classes!("back-to-top", props.visible.then(|| "visible"))}
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
