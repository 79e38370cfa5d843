//! Repository browser view.

use leptos::prelude::*;
use leptos_icons::Icon;
use studyhub_core::format::format_pushed_at;
use studyhub_core::{CodeViewer, HubError, RepoSource};

use super::BrowserContext;
use super::code_panel::CodePanelView;
use super::tree::EntryList;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::{hub, repos};

stylance::import_crate_style!(css, "src/components/repo/repo.module.css");

/// Renders the outcome recorded when the repository was opened. Mounting
/// never loads; a failed open is retried only by opening it again.
#[component]
pub fn RepoBrowser(title: String, repo_id: String) -> impl IntoView {
    let source = config::repository(&repo_id);
    let outcome = repos::tree_outcome(&repo_id);

    let body = match (source, outcome) {
        (None, _) => view! {
            <RepoError
                title=title
                source=None
                error=HubError::Unavailable("unknown repository".to_string())
            />
        }
        .into_any(),
        (Some(source), None) => view! {
            <RepoError
                title=title
                source=Some(source)
                error=HubError::Unavailable(format!("'{}' was not opened", repo_id))
            />
        }
        .into_any(),
        (Some(source), Some(Err(error))) => {
            view! { <RepoError title=title source=Some(source) error=error /> }.into_any()
        }
        (Some(source), Some(Ok(tree))) => {
            let browser = BrowserContext {
                source,
                tree,
                viewer: RwSignal::new(CodeViewer::new()),
            };
            view! { <RepoContents browser=browser /> }.into_any()
        }
    };

    view! { <article class=css::browser>{body}</article> }
}

#[component]
fn RepoContents(browser: BrowserContext) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let source = browser.source;
    let pushed_at = format_pushed_at(&browser.tree.pushed_at());
    let top_level = browser.tree.top_level();
    let tree = browser.tree.clone();
    provide_context(browser);

    view! {
        <header class=css::header>
            <button class=css::backLink on:click=move |_| hub::open_course(ctx, source.course)>
                <Icon icon=ic::BACK />
                {format!("Back to {}", source.course)}
            </button>
            <span class=css::eyebrow>"Live repository"</span>
            <h2 class=css::title>{source.title}</h2>
            <p class=css::subtitle>"Content synced with GitHub"</p>
        </header>

        <div class=css::meta>
            <span class=css::updated>
                <span class=css::dot aria-hidden="true">"●"</span>
                {format!("Last update: {}", pushed_at)}
            </span>
            <RepoLinks source=source />
        </div>

        <div class=css::files role="tree">
            <EntryList tree=tree entries=top_level />
        </div>

        <CodePanelView />
    }
}

#[component]
fn RepoLinks(source: &'static RepoSource) -> impl IntoView {
    view! {
        <div class=css::links>
            <a class=css::zipLink href=source.zip_url() data-open="direct" download="">
                <Icon icon=ic::DOWNLOAD />
                "Download ZIP"
            </a>
            <a
                class=css::githubLink
                href=source.github_url()
                target="_blank"
                rel="noopener"
                data-open="direct"
            >
                <Icon icon=ic::GITHUB />
                "View on GitHub"
            </a>
        </div>
    }
}

/// Shown in place of the tree when the snapshot has no data for this
/// repository. Still a complete view: the user can reach GitHub directly.
#[component]
fn RepoError(title: String, source: Option<&'static RepoSource>, error: HubError) -> impl IntoView {
    let message = if error.is_rate_limited() {
        "The GitHub request limit was exceeded. You can open the repository directly or download the ZIP."
    } else {
        "The repository content could not be loaded. You can open it directly on GitHub."
    };

    view! {
        <header class=css::header>
            <span class=css::eyebrow>"Repository"</span>
            <h2 class=css::title>{title}</h2>
        </header>
        <div class=css::warning role="alert">
            <h3 class=css::warningTitle>"Could not load"</h3>
            <p class=css::warningText>{message}</p>
            <p class=css::warningDetail>{error.user_message()}</p>
        </div>
        {source.map(|source| view! { <RepoLinks source=source /> })}
    }
}
