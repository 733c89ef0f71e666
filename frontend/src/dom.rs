use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::interactions::controller::ScrollBlock;
use crate::interactions::nav::{ScrollSnapshot, SectionBounds};

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current offset plus the geometry of every `section[id]`, in document order.
pub fn scroll_snapshot() -> ScrollSnapshot {
    let mut sections = Vec::new();
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Ok(nodes) = document.query_selector_all("section[id]") {
            for i in 0..nodes.length() {
                let Some(section) = nodes.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };
                sections.push(SectionBounds {
                    id: section.id(),
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.offset_height()),
                });
            }
        }
    }
    ScrollSnapshot {
        offset_y: scroll_offset(),
        sections,
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`. Missing targets are ignored.
pub fn scroll_into_view(id: &str, block: ScrollBlock) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No document to scroll");
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        debug!("Scroll target #{} not found", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
