//! Shared code viewer of a repository view.

use leptos::prelude::*;
use leptos_icons::Icon;
use studyhub_core::CodePanel;

use super::BrowserContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/repo/repo.module.css");

/// File text is inserted as a text node, never parsed as markup.
#[component]
pub fn CodePanelView() -> impl IntoView {
    let browser = use_context::<BrowserContext>().expect("BrowserContext must be provided");
    let viewer = browser.viewer;

    let panel = Memo::new(move |_| viewer.with(|v| v.panel().clone()));

    view! {
        <Show when=move || panel.with(CodePanel::is_open)>
            <section class=css::codePanel aria-label="File viewer">
                <header class=css::codeHeader>
                    <span class=css::codeName>
                        {move || panel.with(|p| p.name().unwrap_or_default().to_string())}
                    </span>
                    <button
                        class=css::codeClose
                        title="Close"
                        aria-label="Close file viewer"
                        on:click=move |_| viewer.update(|v| v.close())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                {move || match panel.get() {
                    CodePanel::Closed => ().into_any(),
                    CodePanel::Loading { .. } => {
                        view! { <pre class=css::codeBody>"Loading..."</pre> }.into_any()
                    }
                    CodePanel::Ready { text, .. } => {
                        view! { <pre class=css::codeBody>{text}</pre> }.into_any()
                    }
                    CodePanel::Failed { message, .. } => {
                        view! { <pre class=format!("{} {}", css::codeBody, css::codeError)>{message}</pre> }
                            .into_any()
                    }
                }}
            </section>
        </Show>
    }
}
