use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HubError;

// =============================================================================
// Snapshot Document
// =============================================================================

/// Root of the static snapshot file (`data/repos.json`).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ReposDocument {
    /// Repository records keyed by repository id
    #[serde(default)]
    pub repos: HashMap<String, RepoRecord>,
}

/// One repository as stored in the snapshot file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RepoRecord {
    /// Time of the last push to the default branch
    pub pushed_at: DateTime<Utc>,
    /// Flat file listing, in the order the snapshot was written
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl ReposDocument {
    /// Parse the snapshot file.
    pub fn from_json(json: &str) -> Result<Self, HubError> {
        serde_json::from_str(json).map_err(|e| HubError::Parse(e.to_string()))
    }

    /// Extract the snapshot for one repository.
    ///
    /// A repository that is missing, or present with no files, is reported as
    /// unavailable rather than shown as an empty tree.
    pub fn snapshot(&self, repo_id: &str) -> Result<RepoSnapshot, HubError> {
        let record = self
            .repos
            .get(repo_id)
            .ok_or_else(|| HubError::Unavailable(format!("no snapshot for '{}'", repo_id)))?;

        if record.files.is_empty() {
            return Err(HubError::Unavailable(format!(
                "snapshot for '{}' is empty",
                repo_id
            )));
        }

        Ok(RepoSnapshot {
            repo_id: repo_id.to_string(),
            pushed_at: record.pushed_at,
            files: record.files.clone(),
        })
    }
}

// =============================================================================
// Snapshot Types
// =============================================================================

/// Kind of a listed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EntryKind {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "file")]
    File,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// A single path in a repository listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Repository-relative path, `/`-separated, no leading slash
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (0 for directories)
    #[serde(default)]
    pub size: u64,
}

impl FileEntry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            size: 0,
        }
    }
}

/// Point-in-time listing of one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub repo_id: String,
    pub pushed_at: DateTime<Utc>,
    pub files: Vec<FileEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "repos": {
            "dwec-arrays": {
                "pushed_at": "2025-01-14T18:22:05Z",
                "files": [
                    { "path": "README.md", "type": "file", "size": 812 },
                    { "path": "ejercicios", "type": "dir", "size": 0 },
                    { "path": "ejercicios/01.js", "type": "file", "size": 240 }
                ]
            },
            "empty": { "pushed_at": "2024-09-01T00:00:00Z", "files": [] }
        }
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = ReposDocument::from_json(SAMPLE).expect("sample should parse");
        assert_eq!(doc.repos.len(), 2);

        let snapshot = doc.snapshot("dwec-arrays").expect("repo should exist");
        assert_eq!(snapshot.repo_id, "dwec-arrays");
        assert_eq!(snapshot.files.len(), 3);
        assert_eq!(snapshot.files[1].kind, EntryKind::Directory);
        assert_eq!(snapshot.files[2], FileEntry::file("ejercicios/01.js", 240));
        assert_eq!(snapshot.pushed_at.to_rfc3339(), "2025-01-14T18:22:05+00:00");
    }

    #[test]
    fn test_missing_and_empty_are_unavailable() {
        let doc = ReposDocument::from_json(SAMPLE).unwrap();
        assert!(matches!(doc.snapshot("nope"), Err(HubError::Unavailable(_))));
        assert!(matches!(doc.snapshot("empty"), Err(HubError::Unavailable(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            ReposDocument::from_json("<html>offline</html>"),
            Err(HubError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_size_defaults_to_zero() {
        let entry: FileEntry = serde_json::from_str(r#"{"path":"a","type":"dir"}"#).unwrap();
        assert_eq!(entry, FileEntry::dir("a"));
    }
}
