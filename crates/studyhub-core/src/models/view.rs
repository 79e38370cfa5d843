//! View states held on the navigation stack.

use serde::{Deserialize, Serialize};

/// Content of a module view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleContent {
    /// Fully rendered markup, injected as-is
    Markup(String),
    /// Live file tree of a configured repository
    Repository { repo_id: String },
}

/// One entry of the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    /// Landing view
    Home,
    /// A course module (fetched page, built-in page or repository browser)
    Module { title: String, content: ModuleContent },
    /// Informational or error panel
    Notice { markup: String },
    /// External resource shown in the embed overlay
    External { title: String, url: String },
}

impl ViewState {
    pub fn module(title: impl Into<String>, markup: impl Into<String>) -> Self {
        Self::Module {
            title: title.into(),
            content: ModuleContent::Markup(markup.into()),
        }
    }

    pub fn repository(title: impl Into<String>, repo_id: impl Into<String>) -> Self {
        Self::Module {
            title: title.into(),
            content: ModuleContent::Repository {
                repo_id: repo_id.into(),
            },
        }
    }

    pub fn notice(markup: impl Into<String>) -> Self {
        Self::Notice {
            markup: markup.into(),
        }
    }

    pub fn external(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::External {
            title: title.into(),
            url: url.into(),
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Module { .. } => "module",
            Self::Notice { .. } => "notice",
            Self::External { .. } => "external",
        }
    }
}
