//! Page layout.
//!
//! The shell is mounted once. Navigation only changes what the viewer and
//! the embed overlay render; the chrome around them is stable.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::appbar::AppBar;
use crate::components::embed::EmbedOverlay;
use crate::components::toast::Toast;
use crate::components::viewer::Viewer;
use crate::config::LARGE_SCREEN_QUERY;
use crate::core::hub;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let appbar_ref = NodeRef::<leptos::html::Header>::new();

    // Escape closes the overlay first, then the menu
    let _keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && !hub::close_overlay(ctx) {
            ctx.collapse_menu();
        }
    });

    // Clicks outside the app bar collapse the mobile menu
    let _click = window_event_listener(ev::click, move |ev| {
        if !dom::is_small_screen() || !ctx.menu_open.get_untracked() {
            return;
        }
        let inside = match (appbar_ref.get_untracked(), ev.target()) {
            (Some(appbar), Some(target)) => target
                .dyn_into::<web_sys::Node>()
                .is_ok_and(|node| appbar.contains(Some(&node))),
            _ => false,
        };
        if !inside {
            ctx.collapse_menu();
        }
    });

    let large_screen = use_media_query(LARGE_SCREEN_QUERY);
    Effect::new(move |_| {
        if large_screen.get() {
            ctx.collapse_menu();
        }
    });

    view! {
        <div class=css::shell>
            <AppBar header_ref=appbar_ref />
            <main class=css::main>
                <Viewer />
            </main>
            <EmbedOverlay />
            <Toast />
        </div>
    }
}
