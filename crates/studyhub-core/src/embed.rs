//! Decides whether an external resource can be shown in the embed overlay.

use url::Url;

use crate::error::HubError;

/// Where an external target should be opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedDecision {
    /// Host refuses framing; open a new top-level browsing context.
    NewTab { url: String },
    /// Show inside the overlay iframe.
    Overlay { title: String, url: String },
}

/// Host list of sites that forbid being framed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedPolicy {
    no_embed_hosts: Vec<String>,
}

impl EmbedPolicy {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            no_embed_hosts: hosts
                .into_iter()
                .map(|h| h.into().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Whether `url` points at a listed host or one of its subdomains.
    pub fn blocks(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        self.no_embed_hosts.iter().any(|blocked| {
            host == *blocked
                || host
                    .strip_suffix(blocked.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Resolve `href` against `base` and decide where it opens.
    pub fn decide(&self, base: &Url, href: &str, title: &str) -> Result<EmbedDecision, HubError> {
        let url = resolve(base, href)?;
        let decision = if self.blocks(&url) {
            EmbedDecision::NewTab {
                url: url.to_string(),
            }
        } else {
            EmbedDecision::Overlay {
                title: title.to_string(),
                url: url.to_string(),
            }
        };
        tracing::debug!(?decision, "embed decision");
        Ok(decision)
    }
}

/// Resolve a possibly relative `href` against the page URL.
pub fn resolve(base: &Url, href: &str) -> Result<Url, HubError> {
    base.join(href.trim())
        .map_err(|e| HubError::Parse(format!("invalid link '{}': {}", href, e)))
}
