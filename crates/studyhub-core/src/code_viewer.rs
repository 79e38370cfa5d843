//! State of the shared code viewer panel.
//!
//! One panel exists per repository view. Opening a file replaces whatever
//! was shown before; a fetch that resolves after a newer open is dropped.

use crate::error::HubError;
use crate::request::{RequestGuard, RequestToken};

/// What the panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CodePanel {
    #[default]
    Closed,
    Loading { name: String },
    /// Raw file text, rendered as literal preformatted text
    Ready { name: String, text: String },
    /// Literal error line shown in place of the file body
    Failed { name: String, message: String },
}

impl CodePanel {
    #[inline]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Heading of the open panel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Loading { name } | Self::Ready { name, .. } | Self::Failed { name, .. } => {
                Some(name)
            }
        }
    }
}

/// Panel state plus the token of the fetch it is waiting for.
#[derive(Clone, Debug, Default)]
pub struct CodeViewer {
    panel: CodePanel,
    guard: RequestGuard,
}

impl CodeViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &CodePanel {
        &self.panel
    }

    /// Show the panel in its loading state for `name`.
    pub fn open(&mut self, name: impl Into<String>) -> RequestToken {
        self.panel = CodePanel::Loading { name: name.into() };
        self.guard.begin()
    }

    /// Apply a fetch result. Returns `false` if the result was stale.
    pub fn resolve(&mut self, token: RequestToken, result: Result<String, HubError>) -> bool {
        if !self.guard.is_current(token) {
            return false;
        }
        let CodePanel::Loading { name } = std::mem::take(&mut self.panel) else {
            return false;
        };
        self.panel = match result {
            Ok(text) => CodePanel::Ready { name, text },
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "file fetch failed");
                CodePanel::Failed {
                    name,
                    message: format!("Could not load the file: {}", err.user_message()),
                }
            }
        };
        true
    }

    /// Hide the panel and drop its content.
    pub fn close(&mut self) {
        self.guard.invalidate();
        self.panel = CodePanel::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_open_shows_loading() {
        let mut viewer = CodeViewer::new();
        viewer.open("main.js");
        assert_eq!(
            viewer.panel(),
            &CodePanel::Loading {
                name: "main.js".to_string()
            }
        );
        assert!(viewer.panel().is_open());
    }

    #[test]
    fn test_resolve_keeps_text_literal() {
        let mut viewer = CodeViewer::new();
        let token = viewer.open("index.html");
        let text = "<script>alert(1)</script>".to_string();
        assert!(viewer.resolve(token, Ok(text.clone())));
        assert_eq!(
            viewer.panel(),
            &CodePanel::Ready {
                name: "index.html".to_string(),
                text,
            }
        );
    }

    #[test]
    fn test_missing_file_yields_error_text() {
        let mut viewer = CodeViewer::new();
        let token = viewer.open("ghost.js");
        viewer.resolve(token, Err(HubError::NotFound("src/ghost.js".to_string())));

        match viewer.panel() {
            CodePanel::Failed { name, message } => {
                assert_eq!(name, "ghost.js");
                assert!(message.contains("src/ghost.js"));
            }
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_second_open_replaces_first() {
        let mut viewer = CodeViewer::new();
        let first = viewer.open("a.js");
        let second = viewer.open("b.js");

        assert!(!viewer.resolve(first, Ok("a".to_string())));
        assert_eq!(viewer.panel().name(), Some("b.js"));

        assert!(viewer.resolve(second, Err(FetchError::HttpError(500).into())));
        assert!(matches!(viewer.panel(), CodePanel::Failed { .. }));
    }

    #[test]
    fn test_close_discards_and_ignores_late_result() {
        let mut viewer = CodeViewer::new();
        let token = viewer.open("a.js");
        viewer.close();
        assert!(!viewer.resolve(token, Ok("late".to_string())));
        assert_eq!(viewer.panel(), &CodePanel::Closed);
        assert_eq!(viewer.panel().name(), None);
    }
}
