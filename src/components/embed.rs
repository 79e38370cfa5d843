//! External resource overlay.
//!
//! Renders on top of the viewer whenever the top view state is external.
//! The frame is reset to a blank page before every new target so a slow
//! load never flashes the previous resource.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::viewer::Loading;
use crate::config::EMBED_PLACEHOLDER;
use crate::core::hub;

stylance::import_crate_style!(css, "src/components/embed.module.css");

#[component]
pub fn EmbedOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let frame = Memo::new(move |_| ctx.nav.with(|nav| nav.overlay()));
    let is_open = Memo::new(move |_| frame.with(Option::is_some));
    let loading = RwSignal::new(false);
    let iframe_ref = NodeRef::<html::Iframe>::new();

    Effect::new(move |_| {
        let target = frame.with(|f| f.as_ref().map(|f| f.url.clone()));
        let Some(iframe) = iframe_ref.get() else {
            return;
        };
        iframe.set_src(EMBED_PLACEHOLDER);
        match target {
            Some(url) => {
                tracing::debug!(%url, "embedding external resource");
                loading.set(true);
                iframe.set_src(&url);
            }
            None => loading.set(false),
        }
    });

    // The placeholder fires its own load event; only the target clears the
    // spinner.
    let on_load = move |_| {
        if let Some(iframe) = iframe_ref.get_untracked()
            && iframe.src() != EMBED_PLACEHOLDER
        {
            loading.set(false);
        }
    };

    let overlay_class = move || {
        if is_open.get() {
            format!("{} {}", css::overlay, css::open)
        } else {
            css::overlay.to_string()
        }
    };

    let title = move || frame.with(|f| f.as_ref().map(|f| f.title.clone()).unwrap_or_default());

    view! {
        <div
            class=overlay_class
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            aria-label=title
        >
            <div class=css::panel>
                <header class=css::header>
                    <h2 class=css::title>{title}</h2>
                    <button
                        class=css::close
                        title="Close"
                        aria-label="Close external resource"
                        on:click=move |_| {
                            hub::close_overlay(ctx);
                        }
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::body>
                    <Show when=move || loading.get()>
                        <div class=css::loader>
                            <Loading label=title() />
                        </div>
                    </Show>
                    <iframe
                        node_ref=iframe_ref
                        class=css::frame
                        src=EMBED_PLACEHOLDER
                        title=title
                        allow="fullscreen"
                        referrerpolicy="no-referrer"
                        on:load=on_load
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
