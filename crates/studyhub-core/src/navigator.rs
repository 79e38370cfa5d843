//! View-state navigation stack.
//!
//! The [`Navigator`] owns the stack of [`ViewState`]s and is the single
//! source of truth for what the content region and the embed overlay show.
//! Rendering is a pure function of the navigator ([`Navigator::screen`] and
//! [`Navigator::overlay`]); the UI layer only applies the result.
//!
//! # Invariants
//!
//! - The bottom of the stack is always [`ViewState::Home`]; it is never popped.
//! - The overlay is open exactly when the top of the stack is
//!   [`ViewState::External`].
//! - A load that completes after a newer navigation is discarded.

use serde::{Deserialize, Serialize};

use crate::models::{ModuleContent, ViewState};
use crate::request::{RequestGuard, RequestToken};

/// What the content region should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Placeholder while a load is in flight
    Loading { label: String },
    /// Landing view
    Home,
    /// Stored module or notice markup
    Markup(String),
    /// Live repository browser
    Repository { title: String, repo_id: String },
}

/// What the embed overlay should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedFrame {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PendingLoad {
    label: String,
    token: RequestToken,
}

/// Navigation stack with request-token guarded loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    stack: Vec<ViewState>,
    pending: Option<PendingLoad>,
    guard: RequestGuard,
}

impl Navigator {
    /// Create a navigator holding only the initial `Home` state.
    pub fn new() -> Self {
        Self {
            stack: vec![ViewState::Home],
            pending: None,
            guard: RequestGuard::new(),
        }
    }

    // =========================================================================
    // Stack Operations
    // =========================================================================

    /// Push a state that is ready to display.
    ///
    /// Supersedes any load still in flight.
    pub fn push(&mut self, state: ViewState) {
        self.cancel_pending();
        tracing::debug!(kind = state.kind(), depth = self.stack.len() + 1, "push view state");
        self.stack.push(state);
    }

    /// Pop the top state. No-op (returns `false`) at depth 1.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.cancel_pending();
        if let Some(state) = self.stack.pop() {
            tracing::debug!(kind = state.kind(), depth = self.stack.len(), "pop view state");
        }
        true
    }

    /// Close the embed overlay from its own controls.
    ///
    /// Pops exactly one state if the top is `External`; otherwise leaves the
    /// stack untouched. Returns whether a state was popped.
    pub fn close_overlay(&mut self) -> bool {
        if self.stack.len() > 1 && self.current().is_external() {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Guarded Loads
    // =========================================================================

    /// Show a loading placeholder and start a load.
    pub fn begin_load(&mut self, label: impl Into<String>) -> RequestToken {
        let token = self.guard.begin();
        self.pending = Some(PendingLoad {
            label: label.into(),
            token,
        });
        token
    }

    /// Finish a load by pushing its resulting state.
    ///
    /// Returns `false` and changes nothing when a newer navigation happened
    /// after the load began.
    pub fn complete_load(&mut self, token: RequestToken, state: ViewState) -> bool {
        if !self.guard.is_current(token) {
            tracing::debug!(?token, kind = state.kind(), "discarding stale load");
            return false;
        }
        self.pending = None;
        self.guard.invalidate();
        tracing::debug!(kind = state.kind(), depth = self.stack.len() + 1, "push loaded state");
        self.stack.push(state);
        true
    }

    /// Whether `token` still belongs to the most recent navigation.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.guard.is_current(token)
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
        self.guard.invalidate();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Back control is enabled iff there is something to pop.
    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Top of the stack.
    pub fn current(&self) -> &ViewState {
        // The stack is never empty.
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[ViewState] {
        &self.stack
    }

    /// Content region for the current stack.
    ///
    /// External states live in the overlay, so the content region keeps
    /// showing the nearest state beneath them.
    pub fn screen(&self) -> Screen {
        if let Some(pending) = &self.pending {
            return Screen::Loading {
                label: pending.label.clone(),
            };
        }

        let state = self.stack.iter().rev().find(|s| !s.is_external());
        match state {
            Some(ViewState::Module {
                content: ModuleContent::Markup(markup),
                ..
            }) => Screen::Markup(markup.clone()),
            Some(ViewState::Module {
                title,
                content: ModuleContent::Repository { repo_id },
            }) => Screen::Repository {
                title: title.clone(),
                repo_id: repo_id.clone(),
            },
            Some(ViewState::Notice { markup }) => Screen::Markup(markup.clone()),
            Some(ViewState::Home) | Some(ViewState::External { .. }) | None => Screen::Home,
        }
    }

    /// Whether anchors in the content region are routed by the hub.
    ///
    /// Only stored module markup is intercepted; notices, the home view and
    /// the repository browser leave anchors to the browser.
    pub fn intercepts_links(&self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        matches!(
            self.stack.iter().rev().find(|s| !s.is_external()),
            Some(ViewState::Module {
                content: ModuleContent::Markup(_),
                ..
            })
        )
    }

    /// Overlay contents, present only while an `External` state is on top.
    pub fn overlay(&self) -> Option<EmbedFrame> {
        match self.current() {
            ViewState::External { title, url } => Some(EmbedFrame {
                title: title.clone(),
                url: url.clone(),
            }),
            _ => None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_states() -> Vec<ViewState> {
        vec![
            ViewState::Home,
            ViewState::module("Python", "<article>python</article>"),
            ViewState::repository("DWEC - Arrays", "dwec-arrays"),
            ViewState::notice("<article>notice</article>"),
            ViewState::external("Daypo", "https://example.org/quiz"),
        ]
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_go_back());
        assert_eq!(nav.current(), &ViewState::Home);
        assert_eq!(nav.screen(), Screen::Home);
        assert!(nav.overlay().is_none());
    }

    #[test]
    fn test_home_cannot_be_popped() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &ViewState::Home);
    }

    #[test]
    fn test_push_then_back_restores_screen() {
        for base in sample_states() {
            for next in sample_states() {
                let mut nav = Navigator::new();
                nav.push(ViewState::module("Start", "<p>start</p>"));
                nav.push(base.clone());

                let before = (nav.screen(), nav.overlay(), nav.depth());
                nav.push(next.clone());
                assert!(nav.can_go_back());
                assert!(nav.go_back());
                let after = (nav.screen(), nav.overlay(), nav.depth());

                assert_eq!(before, after, "base={:?} next={:?}", base, next);
            }
        }
    }

    #[test]
    fn test_back_enabled_iff_depth_above_one() {
        let mut nav = Navigator::new();
        nav.push(ViewState::notice("<p>n</p>"));
        assert!(nav.can_go_back());
        nav.go_back();
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_external_shows_overlay_over_previous_content() {
        let mut nav = Navigator::new();
        nav.push(ViewState::module("M", "<p>m</p>"));
        nav.push(ViewState::external("Quiz", "https://example.org"));

        assert_eq!(nav.screen(), Screen::Markup("<p>m</p>".to_string()));
        assert_eq!(
            nav.overlay(),
            Some(EmbedFrame {
                title: "Quiz".to_string(),
                url: "https://example.org".to_string(),
            })
        );

        assert!(nav.go_back());
        assert!(nav.overlay().is_none());
    }

    #[test]
    fn test_close_overlay_pops_only_external() {
        let mut nav = Navigator::new();
        nav.push(ViewState::module("M", "<p>m</p>"));
        assert!(!nav.close_overlay());
        assert_eq!(nav.depth(), 2);

        nav.push(ViewState::external("Quiz", "https://example.org"));
        assert!(nav.close_overlay());
        assert_eq!(nav.depth(), 2);
        assert!(!nav.current().is_external());

        assert!(!nav.close_overlay());
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_close_overlay_at_home() {
        let mut nav = Navigator::new();
        assert!(!nav.close_overlay());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_load_shows_placeholder_then_pushes() {
        let mut nav = Navigator::new();
        let token = nav.begin_load("Python");

        assert!(nav.is_loading());
        assert_eq!(
            nav.screen(),
            Screen::Loading {
                label: "Python".to_string()
            }
        );
        assert_eq!(nav.depth(), 1);

        assert!(nav.complete_load(token, ViewState::module("Python", "<p>py</p>")));
        assert!(!nav.is_loading());
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.screen(), Screen::Markup("<p>py</p>".to_string()));
    }

    #[test]
    fn test_failed_load_pushes_notice() {
        let mut nav = Navigator::new();
        let token = nav.begin_load("Broken");
        assert!(nav.complete_load(token, ViewState::notice("<p>could not open</p>")));
        assert!(matches!(nav.current(), ViewState::Notice { .. }));
        assert!(nav.go_back());
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut nav = Navigator::new();
        let slow = nav.begin_load("Slow");
        let fast = nav.begin_load("Fast");

        assert!(nav.complete_load(fast, ViewState::module("Fast", "<p>fast</p>")));
        assert!(!nav.complete_load(slow, ViewState::module("Slow", "<p>slow</p>")));

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.screen(), Screen::Markup("<p>fast</p>".to_string()));
    }

    #[test]
    fn test_completed_token_cannot_push_twice() {
        let mut nav = Navigator::new();
        let token = nav.begin_load("Once");
        assert!(nav.complete_load(token, ViewState::notice("<p>1</p>")));
        assert!(!nav.complete_load(token, ViewState::notice("<p>2</p>")));
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_navigation_supersedes_pending_load() {
        let mut nav = Navigator::new();
        nav.push(ViewState::module("A", "<p>a</p>"));

        let token = nav.begin_load("Slow");
        assert!(nav.go_back());
        assert!(!nav.is_loading());
        assert!(!nav.is_current(token));
        assert!(!nav.complete_load(token, ViewState::module("Slow", "<p>slow</p>")));
        assert_eq!(nav.depth(), 1);

        let token = nav.begin_load("Slow again");
        nav.push(ViewState::external("Quiz", "https://example.org"));
        assert!(!nav.complete_load(token, ViewState::notice("<p>late</p>")));
        assert!(nav.current().is_external());
    }

    #[test]
    fn test_links_intercepted_only_in_module_markup() {
        let mut nav = Navigator::new();
        assert!(!nav.intercepts_links());

        nav.push(ViewState::module("Python", "<a href=\"#\">x</a>"));
        assert!(nav.intercepts_links());

        // Still the module underneath the overlay
        nav.push(ViewState::external("Quiz", "https://example.org/quiz"));
        assert!(nav.intercepts_links());

        nav.push(ViewState::notice("<article>notice</article>"));
        assert!(!nav.intercepts_links());

        nav.push(ViewState::repository("DWEC - Arrays", "dwec-arrays"));
        assert!(!nav.intercepts_links());

        nav.push(ViewState::module("Python", "<article>python</article>"));
        nav.begin_load("DWES");
        assert!(!nav.intercepts_links());
    }

    #[test]
    fn test_navigator_is_serializable() {
        let mut nav = Navigator::new();
        nav.push(ViewState::repository("Repo", "dwes-examenes"));
        let json = serde_json::to_string(&nav).unwrap();
        let back: Navigator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nav);
    }
}
