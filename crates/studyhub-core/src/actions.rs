//! State transitions behind the hub's user actions.
//!
//! The web crate performs the I/O (fetching, opening tabs, showing toasts);
//! what a finished action does to the navigation stack is decided here.

use crate::document::ModuleDocument;
use crate::embed::EmbedDecision;
use crate::error::HubError;
use crate::models::ViewState;
use crate::navigator::Navigator;
use crate::templates;

/// Toast raised when a module page cannot be loaded.
pub const MODULE_LOAD_FAILED: &str = "Could not load the module.";

/// View state produced by a finished module load, and the toast to raise
/// with it.
///
/// A loaded page becomes a `Module` wrapped in the standard frame. Any
/// failure becomes a `Notice` naming `label`, plus a toast.
pub fn module_outcome(
    loaded: Result<ModuleDocument, HubError>,
    label: &str,
) -> (ViewState, Option<&'static str>) {
    match loaded {
        Ok(doc) => {
            let markup = templates::module_frame(&doc.title, &doc.content);
            (ViewState::module(doc.title, markup), None)
        }
        Err(e) => {
            tracing::warn!(label, error = %e, "module load failed");
            (
                ViewState::notice(templates::load_error(label)),
                Some(MODULE_LOAD_FAILED),
            )
        }
    }
}

/// Apply an embed decision to the stack.
///
/// An overlay pushes exactly one `External` state. A new-tab decision
/// leaves the stack untouched and hands back the URL to open.
pub fn apply_embed_decision(nav: &mut Navigator, decision: EmbedDecision) -> Option<String> {
    match decision {
        EmbedDecision::NewTab { url } => Some(url),
        EmbedDecision::Overlay { title, url } => {
            nav.push(ViewState::external(title, url));
            None
        }
    }
}
