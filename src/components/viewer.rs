//! Content region.
//!
//! Renders whatever [`Navigator::screen`](studyhub_core::Navigator::screen)
//! describes. Clicks anywhere inside go through a single delegated handler,
//! so swapped-in markup never needs listeners of its own.

use leptos::prelude::*;
use studyhub_core::Screen;

use crate::app::AppContext;
use crate::components::home::Home;
use crate::components::repo::RepoBrowser;
use crate::core::hub;

stylance::import_crate_style!(css, "src/components/viewer.module.css");

#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let screen = Memo::new(move |_| ctx.nav.with(|nav| nav.screen()));

    view! {
        <section
            id="viewer"
            class=css::viewer
            aria-live="polite"
            on:click=move |ev| hub::handle_viewer_click(ctx, &ev)
        >
            {move || match screen.get() {
                Screen::Home => view! { <Home /> }.into_any(),
                Screen::Loading { label } => view! { <Loading label=label /> }.into_any(),
                Screen::Markup(markup) => {
                    view! { <div class=format!("{} viewer-content", css::content) inner_html=markup /> }
                        .into_any()
                }
                Screen::Repository { title, repo_id } => {
                    view! { <RepoBrowser title=title repo_id=repo_id /> }.into_any()
                }
            }}
        </section>
    }
}

/// Placeholder shown while a load is in flight.
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <div class=css::spinner aria-hidden="true"></div>
            <p class=css::loadingText>{format!("Loading {}...", label)}</p>
        </div>
    }
}
