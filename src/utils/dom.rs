//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

use studyhub_core::{ActionMarker, AnchorInfo};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Page URL, used as the base for resolving relative links.
pub fn page_url() -> Option<url::Url> {
    let href = window()?.location().href().ok()?;
    url::Url::parse(&href).ok()
}

/// Whether the viewport is below the large-screen breakpoint.
pub fn is_small_screen() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|width| width < 1024.0)
}

/// Open `url` in a new top-level browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window
            .open_with_url_and_target_and_features(url, "_blank", "noopener")
            .is_err()
    {
        tracing::warn!(url, "window.open was refused");
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// =============================================================================
// Click Delegation Helpers
// =============================================================================

/// Element hit by a delegated click inside the viewer.
pub enum ClickTarget {
    Action(ActionMarker),
    Anchor(AnchorInfo),
}

/// Find the nearest `data-action` element or anchor around the event target.
pub fn click_target(target: Option<web_sys::EventTarget>) -> Option<ClickTarget> {
    let element = target?.dyn_into::<Element>().ok()?;
    let hit = element.closest("[data-action], a").ok()??;

    if hit.has_attribute("data-action") {
        return Some(ClickTarget::Action(ActionMarker {
            action: hit.get_attribute("data-action").unwrap_or_default(),
            target: hit.get_attribute("data-target"),
            label: hit.get_attribute("data-label"),
            repo: hit.get_attribute("data-repo"),
        }));
    }

    let card_title = hit
        .closest(".ra-card")
        .ok()
        .flatten()
        .and_then(|card| card.query_selector("h3").ok().flatten())
        .and_then(|heading| heading.text_content());

    Some(ClickTarget::Anchor(AnchorInfo {
        href: hit.get_attribute("href"),
        open: hit.get_attribute("data-open"),
        label: hit.get_attribute("data-label"),
        card_title,
        text: hit.text_content().unwrap_or_default(),
    }))
}
