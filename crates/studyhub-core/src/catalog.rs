//! Static site catalogue: courses, practice repositories and notebooks.
//!
//! Entries are `'static` so the web app can declare them as constants.

use url::Url;

use crate::error::HubError;

pub const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com/";
pub const GITHUB_BASE: &str = "https://github.com/";

/// A course subject with its own landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    /// Short code shown in the navigation (e.g. "DWEC")
    pub code: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// A GitHub repository mirrored in the snapshot file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepoSource {
    /// Key under `repos` in the snapshot document
    pub id: &'static str,
    pub owner: &'static str,
    pub name: &'static str,
    pub branch: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `Course::code` this repository belongs to
    pub course: &'static str,
}

impl RepoSource {
    /// Raw content URL of a repository-relative file.
    pub fn raw_url(&self, path: &str) -> Result<String, HubError> {
        let mut url = Url::parse(RAW_CONTENT_BASE)
            .map_err(|e| HubError::Parse(format!("invalid raw content base: {}", e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| HubError::Parse("raw content base cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.push(self.owner).push(self.name).push(self.branch);
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url.into())
    }

    pub fn github_url(&self) -> String {
        format!("{}{}/{}", GITHUB_BASE, self.owner, self.name)
    }

    pub fn zip_url(&self) -> String {
        format!("{}/archive/refs/heads/{}.zip", self.github_url(), self.branch)
    }
}

/// An external notebook entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notebook {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// What a navigation bar entry opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Same-origin page fetched into the viewer
    Page(&'static str),
    /// Course landing page, by `Course::code`
    Course(&'static str),
    Notebooks,
    /// Entry without content yet
    UnderConstruction,
    /// Plain link the browser follows itself
    Direct(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Item of the "latest updates" list on the home view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeUpdate {
    pub title: &'static str,
    pub summary: &'static str,
    /// Page loaded when the item is clicked
    pub target: &'static str,
    pub label: &'static str,
}

/// Files that should be downloaded rather than shown as text.
pub fn opens_in_new_tab(file_name: &str) -> bool {
    matches!(
        extension(file_name).as_deref(),
        Some("zip") | Some("pdf")
    )
}

/// Lowercased extension after the last dot, if any.
pub fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
