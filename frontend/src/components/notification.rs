use yew::prelude::*;

use crate::interactions::controller::UiEvent;
use crate::interactions::toast::Toast;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Option<Toast>,
    pub on_event: Callback<UiEvent>,
}

/// The page's one toast. Keyed by id so a replacement slides in fresh.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let close = {
        let on_event = props.on_event.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::DismissToast(id)))
    };

    let severity = toast.severity;
    let animation = if toast.leaving { "slideOut" } else { "slideIn" };
    let style = format!(
        "background: {}; color: {}; animation: {} 0.3s ease forwards;",
        severity.background(),
        severity.color(),
        animation
    );

    html! {
        <div
            key={toast.id.to_string()}
            class={classes!("notification", format!("notification-{}", severity.as_str()))}
            role="status"
            style={style}
        >
            <div class="notification-content">
                <i class={classes!("fas", severity.icon())}></i>
                <span>{ &toast.message }</span>
            </div>
            <button class="notification-close" aria-label="Dismiss" onclick={close}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
