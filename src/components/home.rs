//! Landing view.
//!
//! Buttons here carry `data-action` markers and are handled by the viewer's
//! delegated click listener.

use leptos::prelude::*;

use crate::config::{APP_TAGLINE, HOME_UPDATES};

stylance::import_crate_style!(css, "src/components/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class=css::home>
            <div class=css::hero>
                <span class=css::badge>"Interactive hub"</span>
                <h2 class=css::heading>{APP_TAGLINE}</h2>
                <p class=css::lead>
                    "A collection of resources, Daypo quizzes and exams from previous years."
                </p>
                <div class=css::actions>
                    <button class=css::primary data-action="scroll-nav">"Browse modules"</button>
                    <button class=css::secondary data-action="visit-daypo">"Open Daypo"</button>
                </div>
            </div>

            <div class=css::updates>
                <h3 class=css::updatesTitle>"Latest updates"</h3>
                <ul class=css::updateList>
                    {HOME_UPDATES
                        .iter()
                        .map(|update| {
                            view! {
                                <li
                                    class=css::update
                                    data-action="nav-module"
                                    data-target=update.target
                                    data-label=update.label
                                >
                                    <div>
                                        <p class=css::updateTitle>{update.title}</p>
                                        <p class=css::updateSummary>{update.summary}</p>
                                    </div>
                                    <span class=css::arrow aria-hidden="true">"→"</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
