//! Hub actions.
//!
//! Every user-triggered navigation goes through here. Each action mutates
//! the [`Navigator`](studyhub_core::Navigator) held in [`AppContext`]; the
//! view layer re-renders from it.

use leptos::prelude::*;
use studyhub_core::{
    EmbedDecision, EmbedPolicy, HubError, LinkAction, ViewState, ViewerAction,
    apply_embed_decision, classify_anchor, extract_module, module_outcome, templates,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::app::AppContext;
use crate::config::{
    self, MODULE_CONTENT_SELECTOR, NAV_PANEL_ID, NO_EMBED_HOSTS, NOTEBOOKS, QUIZ_SITE_LABEL,
    QUIZ_SITE_URL,
};
use crate::core::repos;
use crate::utils::dom::{self, ClickTarget};
use crate::utils::fetch_text;

const UNDER_CONSTRUCTION: &str = "Under construction";

fn embed_policy() -> EmbedPolicy {
    EmbedPolicy::new(NO_EMBED_HOSTS.iter().copied())
}

// =============================================================================
// Module Loader
// =============================================================================

/// Fetch a same-origin page and push it as a module.
///
/// A loading placeholder shows while the fetch runs. Any failure pushes a
/// notice and raises a toast instead.
pub fn load_module(ctx: AppContext, target: String, label: String) {
    let Some(token) = ctx.nav.try_update(|nav| nav.begin_load(label.clone())) else {
        return;
    };
    tracing::info!(%target, %label, "loading module");

    spawn_local(async move {
        let loaded = match fetch_text(&target).await {
            Ok(html) => extract_module(&html, MODULE_CONTENT_SELECTOR, &label),
            Err(e) => Err(HubError::from(e)),
        };

        let (state, toast) = module_outcome(loaded, &label);

        let applied = ctx
            .nav
            .try_update(|nav| nav.complete_load(token, state))
            .unwrap_or(false);
        if applied && let Some(message) = toast {
            ctx.toast.show(message);
        }
    });
}

// =============================================================================
// Built-in Pages
// =============================================================================

/// Push the landing page of a course.
pub fn open_course(ctx: AppContext, code: &str) {
    let Some(course) = config::course(code) else {
        tracing::warn!(code, "unknown course");
        show_under_construction(ctx, code);
        return;
    };
    let markup = templates::course_page(course, config::course_repositories(code));
    ctx.nav.update(|nav| nav.push(ViewState::module(course.code, markup)));
}

/// Push the notebook directory.
pub fn open_notebooks(ctx: AppContext) {
    const TITLE: &str = "NotebookLM";
    let markup = templates::module_frame(TITLE, &templates::notebook_page(NOTEBOOKS));
    ctx.nav.update(|nav| nav.push(ViewState::module(TITLE, markup)));
}

/// Push the "under construction" notice for a navigation entry.
pub fn show_under_construction(ctx: AppContext, label: &str) {
    let markup = templates::under_construction(label);
    ctx.nav.update(|nav| nav.push(ViewState::notice(markup)));
}

/// Show the live browser of a configured repository.
///
/// The snapshot is loaded behind a placeholder first. The browser state is
/// pushed whether or not that succeeds; without data it renders its error
/// view with direct links to the repository.
pub fn open_repository(ctx: AppContext, repo_id: &str) {
    let Some(source) = config::repository(repo_id) else {
        tracing::warn!(repo_id, "unknown repository");
        ctx.toast.show("This repository is not available.");
        return;
    };
    let Some(token) = ctx.nav.try_update(|nav| nav.begin_load(source.title)) else {
        return;
    };

    spawn_local(async move {
        if let Err(e) = repos::load_tree(source.id).await {
            tracing::warn!(repo = source.id, error = %e, "repository snapshot unavailable");
        }
        ctx.nav.update(|nav| {
            nav.complete_load(token, ViewState::repository(source.title, source.id));
        });
    });
}

// =============================================================================
// External Embed Controller
// =============================================================================

/// Open an external resource in the overlay, or in a new tab for hosts that
/// refuse framing.
pub fn open_external(ctx: AppContext, href: &str, label: &str) {
    let Some(base) = dom::page_url() else {
        return;
    };
    match embed_policy().decide(&base, href, label) {
        Ok(decision) => apply_decision(ctx, decision),
        Err(e) => {
            tracing::warn!(href, error = %e, "cannot open external resource");
            ctx.toast.show(&e.user_message());
        }
    }
}

fn apply_decision(ctx: AppContext, decision: EmbedDecision) {
    let new_tab = ctx
        .nav
        .try_update(|nav| apply_embed_decision(nav, decision))
        .flatten();
    if let Some(url) = new_tab {
        dom::open_in_new_tab(&url);
    }
}

// =============================================================================
// Viewer Click Delegation
// =============================================================================

/// Single click handler of the content viewer.
///
/// Content is swapped wholesale on navigation, so nothing inside it carries
/// its own listeners; this looks at what was clicked instead. Action markers
/// work on every screen; anchors are only routed inside module markup.
pub fn handle_viewer_click(ctx: AppContext, ev: &MouseEvent) {
    match dom::click_target(ev.target()) {
        None => {}
        Some(ClickTarget::Action(marker)) => {
            let Some(action) = ViewerAction::from_marker(&marker) else {
                return;
            };
            ev.prevent_default();
            match action {
                ViewerAction::LoadModule { target, label } => load_module(ctx, target, label),
                ViewerAction::VisitQuizSite => open_external(ctx, QUIZ_SITE_URL, QUIZ_SITE_LABEL),
                ViewerAction::ScrollToNav => dom::scroll_into_view(NAV_PANEL_ID),
                ViewerAction::OpenRepository { repo_id } => open_repository(ctx, &repo_id),
            }
        }
        Some(ClickTarget::Anchor(anchor)) => {
            if !ctx.nav.with_untracked(|nav| nav.intercepts_links()) {
                return;
            }
            let Some(base) = dom::page_url() else {
                return;
            };
            let action = classify_anchor(&anchor, &base, &embed_policy());
            if action != LinkAction::PassThrough {
                ev.prevent_default();
            }
            match action {
                LinkAction::PassThrough => {}
                LinkAction::UnderConstruction => ctx.toast.show(UNDER_CONSTRUCTION),
                LinkAction::NewTab { url } => dom::open_in_new_tab(&url),
                LinkAction::LoadModule { url, label } => load_module(ctx, url, label),
                LinkAction::Embed { url, label } => {
                    apply_decision(ctx, EmbedDecision::Overlay { title: label, url });
                }
            }
        }
    }
}

// =============================================================================
// Stack Controls
// =============================================================================

pub fn go_back(ctx: AppContext) {
    ctx.nav.update(|nav| {
        nav.go_back();
    });
}

/// Close the overlay from its close control or the Escape key.
pub fn close_overlay(ctx: AppContext) -> bool {
    ctx.nav.try_update(|nav| nav.close_overlay()).unwrap_or(false)
}
