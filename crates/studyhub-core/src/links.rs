//! Classification of clicks inside the content viewer.
//!
//! The viewer has a single delegated click listener. It collects the
//! attributes of the nearest marked element into an [`ActionMarker`] or
//! [`AnchorInfo`] and asks this module what to do.

use url::Url;

use crate::embed::{self, EmbedPolicy};

pub const DEFAULT_LINK_LABEL: &str = "Resource";
pub const DEFAULT_PAGE_LABEL: &str = "Details";

/// Attributes of a clicked anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorInfo {
    pub href: Option<String>,
    /// `data-open`
    pub open: Option<String>,
    /// `data-label`
    pub label: Option<String>,
    /// Heading of the enclosing resource card, if any
    pub card_title: Option<String>,
    pub text: String,
}

/// Outcome for an anchor click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Let the browser follow the link.
    PassThrough,
    /// Placeholder link; tell the user it is not ready yet.
    UnderConstruction,
    /// Open in a new top-level browsing context.
    NewTab { url: String },
    /// Same-origin page to fetch into the viewer.
    LoadModule { url: String, label: String },
    /// Anything else goes to the embed overlay.
    Embed { url: String, label: String },
}

/// Classify an anchor click relative to the page at `base`.
pub fn classify_anchor(anchor: &AnchorInfo, base: &Url, policy: &EmbedPolicy) -> LinkAction {
    if anchor.open.as_deref() == Some("direct") {
        return LinkAction::PassThrough;
    }

    let href = anchor.href.as_deref().map(str::trim).unwrap_or_default();
    if href.is_empty() || href == "#" {
        return LinkAction::UnderConstruction;
    }

    let url = match embed::resolve(base, href) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(error = %e, "leaving unparseable link to the browser");
            return LinkAction::PassThrough;
        }
    };

    if policy.blocks(&url) {
        return LinkAction::NewTab {
            url: url.to_string(),
        };
    }

    if url.origin() == base.origin() && url.path().ends_with(".html") {
        return LinkAction::LoadModule {
            url: url.to_string(),
            label: first_non_empty([Some(anchor.text.as_str())], DEFAULT_PAGE_LABEL),
        };
    }

    LinkAction::Embed {
        url: url.to_string(),
        label: first_non_empty(
            [
                anchor.label.as_deref(),
                anchor.card_title.as_deref(),
                Some(anchor.text.as_str()),
            ],
            DEFAULT_LINK_LABEL,
        ),
    }
}

fn first_non_empty<'a, I>(candidates: I, fallback: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

// =============================================================================
// Action Markers
// =============================================================================

/// Attributes of a clicked `data-action` element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionMarker {
    /// `data-action`
    pub action: String,
    /// `data-target`
    pub target: Option<String>,
    /// `data-label`
    pub label: Option<String>,
    /// `data-repo`
    pub repo: Option<String>,
}

/// Behaviour requested by a `data-action` marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    /// `nav-module`: fetch a page into the viewer
    LoadModule { target: String, label: String },
    /// `visit-daypo`: open the quiz site
    VisitQuizSite,
    /// `scroll-nav`: bring the navigation panel into view
    ScrollToNav,
    /// `open-repo`: show a repository browser
    OpenRepository { repo_id: String },
}

impl ViewerAction {
    /// Interpret a marker. Unknown or incomplete markers yield `None`.
    pub fn from_marker(marker: &ActionMarker) -> Option<Self> {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match marker.action.as_str() {
            "nav-module" => {
                let target = non_empty(&marker.target)?;
                let label = non_empty(&marker.label).unwrap_or_else(|| target.clone());
                Some(Self::LoadModule { target, label })
            }
            "visit-daypo" => Some(Self::VisitQuizSite),
            "scroll-nav" => Some(Self::ScrollToNav),
            "open-repo" => non_empty(&marker.repo).map(|repo_id| Self::OpenRepository { repo_id }),
            other => {
                tracing::debug!(action = other, "ignoring unknown action marker");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://hub.example.org/index.html").unwrap()
    }

    fn policy() -> EmbedPolicy {
        EmbedPolicy::new(["daypo.com"])
    }

    fn anchor(href: &str, text: &str) -> AnchorInfo {
        AnchorInfo {
            href: Some(href.to_string()),
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_direct_links_pass_through() {
        let mut a = anchor("https://github.com/o/r", "GitHub");
        a.open = Some("direct".to_string());
        assert_eq!(classify_anchor(&a, &base(), &policy()), LinkAction::PassThrough);
    }

    #[test]
    fn test_placeholder_links() {
        for href in ["", "#", "  "] {
            let a = anchor(href, "Soon");
            assert_eq!(classify_anchor(&a, &base(), &policy()), LinkAction::UnderConstruction);
        }
        let a = AnchorInfo::default();
        assert_eq!(classify_anchor(&a, &base(), &policy()), LinkAction::UnderConstruction);
    }

    #[test]
    fn test_blocked_host_opens_new_tab() {
        let a = anchor("https://www.daypo.com/test.html", "Quiz");
        assert_eq!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::NewTab {
                url: "https://www.daypo.com/test.html".to_string()
            }
        );
    }

    #[test]
    fn test_same_origin_html_loads_module() {
        let a = anchor("features/python/ra5.html", "  RA5  ");
        assert_eq!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::LoadModule {
                url: "https://hub.example.org/features/python/ra5.html".to_string(),
                label: "RA5".to_string(),
            }
        );

        let a = anchor("/other.html", "");
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::LoadModule { label, .. } if label == DEFAULT_PAGE_LABEL
        ));
    }

    #[test]
    fn test_cross_origin_html_is_embedded() {
        let a = anchor("https://example.org/page.html", "Page");
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::Embed { .. }
        ));
    }

    #[test]
    fn test_embed_label_precedence() {
        let mut a = anchor("https://example.org/x", "Open");
        a.card_title = Some("RA1 - Basics".to_string());
        a.label = Some("Quiz RA1".to_string());
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::Embed { label, .. } if label == "Quiz RA1"
        ));

        a.label = None;
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::Embed { label, .. } if label == "RA1 - Basics"
        ));

        a.card_title = Some("  ".to_string());
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::Embed { label, .. } if label == "Open"
        ));

        a.text = String::new();
        assert!(matches!(
            classify_anchor(&a, &base(), &policy()),
            LinkAction::Embed { label, .. } if label == DEFAULT_LINK_LABEL
        ));
    }

    #[test]
    fn test_action_markers() {
        let marker = ActionMarker {
            action: "nav-module".to_string(),
            target: Some("features/python/index.html".to_string()),
            label: Some("Python".to_string()),
            repo: None,
        };
        assert_eq!(
            ViewerAction::from_marker(&marker),
            Some(ViewerAction::LoadModule {
                target: "features/python/index.html".to_string(),
                label: "Python".to_string(),
            })
        );

        let marker = ActionMarker {
            action: "open-repo".to_string(),
            repo: Some("dwec-arrays".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ViewerAction::from_marker(&marker),
            Some(ViewerAction::OpenRepository {
                repo_id: "dwec-arrays".to_string()
            })
        );

        for (action, expected) in [
            ("visit-daypo", Some(ViewerAction::VisitQuizSite)),
            ("scroll-nav", Some(ViewerAction::ScrollToNav)),
            ("nav-module", None),
            ("open-repo", None),
            ("dance", None),
        ] {
            let marker = ActionMarker {
                action: action.to_string(),
                ..Default::default()
            };
            assert_eq!(ViewerAction::from_marker(&marker), expected, "{}", action);
        }
    }
}
