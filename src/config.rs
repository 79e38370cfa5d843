//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! site metadata, network settings, the course catalogue and UI switches.

use studyhub_core::{Course, HomeUpdate, NavEntry, NavTarget, Notebook, RepoSource};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the app bar.
pub const APP_NAME: &str = "Study Hub";

/// Tagline under the app name.
pub const APP_TAGLINE: &str = "Practice for your exams";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Same-origin repository snapshot document.
pub const SNAPSHOT_URL: &str = "data/repos.json";

/// Element of a fetched page holding the module body.
pub const MODULE_CONTENT_SELECTOR: &str = r#"[data-part="module"]"#;

// =============================================================================
// Embedding
// =============================================================================

/// Hosts that refuse to be framed. Subdomains match too.
pub const NO_EMBED_HOSTS: &[&str] = &["daypo.com"];

/// Neutral iframe source used between targets and while closed.
pub const EMBED_PLACEHOLDER: &str = "about:blank";

/// Quiz site opened by the home view's `visit-daypo` action.
pub const QUIZ_SITE_URL: &str = "https://www.daypo.com/";
pub const QUIZ_SITE_LABEL: &str = "Daypo";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 2600;

/// localStorage key of the theme preference.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

/// Breakpoint above which the navigation menu is always shown.
pub const LARGE_SCREEN_QUERY: &str = "(min-width: 1024px)";

/// Element id the navigation panel is rendered with.
pub const NAV_PANEL_ID: &str = "nav-panel";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Catalogue
// =============================================================================

pub const COURSES: &[Course] = &[
    Course {
        code: "DWEC",
        title: "Client-side Web Development",
        summary: "JavaScript, DOM, events and asynchronous programming.",
    },
    Course {
        code: "DWES",
        title: "Server-side Web Development",
        summary: "PHP, databases, MVC and REST APIs.",
    },
];

pub const REPOSITORIES: &[RepoSource] = &[
    RepoSource {
        id: "dwec-arrays",
        owner: "DavidGom1",
        name: "Arrays-Js-Practice",
        branch: "main",
        title: "Arrays JS Practice",
        description: "Array exercises in JavaScript, synced with GitHub.",
        course: "DWEC",
    },
    RepoSource {
        id: "dwes-examenes",
        owner: "DavidGom1",
        name: "DWES-Examenes-otros-a-os",
        branch: "main",
        title: "Past exams",
        description: "Exams from previous years to practise with, synced with GitHub.",
        course: "DWES",
    },
];

/// Notebook directory. Empty shows the empty-state message.
pub const NOTEBOOKS: &[Notebook] = &[];

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Python",
        target: NavTarget::Page("features/python/index.html"),
    },
    NavEntry {
        label: "DWEC",
        target: NavTarget::Course("DWEC"),
    },
    NavEntry {
        label: "DWES",
        target: NavTarget::Course("DWES"),
    },
    NavEntry {
        label: "DIW",
        target: NavTarget::UnderConstruction,
    },
    NavEntry {
        label: "NotebookLM",
        target: NavTarget::Notebooks,
    },
    NavEntry {
        label: "GitHub",
        target: NavTarget::Direct("https://github.com/DavidGom1"),
    },
];

pub const HOME_UPDATES: &[HomeUpdate] = &[HomeUpdate {
    title: "Python - RA5",
    summary: "Added TDD, unittest and pytest quizzes.",
    target: "features/python/index.html",
    label: "Python",
}];

pub fn course(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.code == code)
}

pub fn repository(id: &str) -> Option<&'static RepoSource> {
    REPOSITORIES.iter().find(|r| r.id == id)
}

pub fn course_repositories(code: &str) -> impl Iterator<Item = &'static RepoSource> {
    REPOSITORIES.iter().filter(move |r| r.course == code)
}
