//! Repository tree index.
//!
//! Rebuilds folder structure from the flat listing of a [`RepoSnapshot`].
//! The tree is an arena of nodes indexed by path, with children indexed by
//! name, built once per snapshot. Views of a folder are computed on demand.
//!
//! # Path Convention
//!
//! - Root: empty string `""`
//! - File in root: `"README.md"`
//! - Nested: `"src/lib/util.js"`
//! - No leading or trailing slashes (they are stripped on lookup)

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::HubError;
use crate::models::{EntryKind, FileEntry, RepoSnapshot};

type NodeId = usize;

const ROOT: NodeId = 0;

/// One row of a folder view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    /// Last path segment
    pub name: String,
    /// Full repository-relative path
    pub path: String,
    pub kind: EntryKind,
    /// Size in bytes (0 for directories)
    pub size: u64,
}

impl TreeEntry {
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Immediate children of a folder, directories first.
pub type TreeView = Vec<TreeEntry>;

#[derive(Clone, Debug)]
struct Node {
    name: String,
    path: String,
    kind: EntryKind,
    size: u64,
    /// Children in first-seen order
    children: Vec<NodeId>,
    by_name: HashMap<String, NodeId>,
}

impl Node {
    fn new(name: &str, path: String, kind: EntryKind, size: u64) -> Self {
        Self {
            name: name.to_string(),
            path,
            kind,
            size,
            children: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    fn entry(&self) -> TreeEntry {
        TreeEntry {
            name: self.name.clone(),
            path: self.path.clone(),
            kind: self.kind,
            size: self.size,
        }
    }
}

/// Folder tree of one repository snapshot.
#[derive(Clone, Debug)]
pub struct RepoTree {
    repo_id: String,
    pushed_at: DateTime<Utc>,
    nodes: Vec<Node>,
    by_path: HashMap<String, NodeId>,
}

impl RepoTree {
    /// Build the tree from a snapshot.
    ///
    /// Intermediate directories are synthesized from path structure. When two
    /// entries claim the same path, the first one wins.
    pub fn from_snapshot(snapshot: &RepoSnapshot) -> Self {
        let mut by_path = HashMap::new();
        by_path.insert(String::new(), ROOT);

        let mut tree = Self {
            repo_id: snapshot.repo_id.clone(),
            pushed_at: snapshot.pushed_at,
            nodes: vec![Node::new("", String::new(), EntryKind::Directory, 0)],
            by_path,
        };

        for entry in &snapshot.files {
            tree.insert(entry);
        }

        tracing::debug!(
            repo = %tree.repo_id,
            entries = snapshot.files.len(),
            nodes = tree.nodes.len() - 1,
            "built repository tree"
        );
        tree
    }

    /// Insert a path, walking down from the root and creating directories.
    fn insert(&mut self, entry: &FileEntry) {
        let parts: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
        let mut current = ROOT;

        for (i, part) in parts.iter().enumerate() {
            let is_last = i == parts.len() - 1;

            if let Some(&existing) = self.nodes[current].by_name.get(*part) {
                if is_last {
                    // First occurrence wins.
                    return;
                }
                if !self.nodes[existing].kind.is_dir() {
                    tracing::warn!(
                        repo = %self.repo_id,
                        path = %entry.path,
                        "snapshot conflict: path blocked by existing file"
                    );
                    return;
                }
                current = existing;
                continue;
            }

            let path = parts[..=i].join("/");
            let (kind, size) = if is_last {
                let size = if entry.kind.is_dir() { 0 } else { entry.size };
                (entry.kind, size)
            } else {
                (EntryKind::Directory, 0)
            };

            let id = self.nodes.len();
            self.nodes.push(Node::new(part, path.clone(), kind, size));
            self.nodes[current].children.push(id);
            self.nodes[current].by_name.insert(part.to_string(), id);
            self.by_path.insert(path, id);
            current = id;
        }
    }

    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    pub fn pushed_at(&self) -> DateTime<Utc> {
        self.pushed_at
    }

    /// Number of paths in the tree (root excluded).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip leading/trailing and doubled slashes.
    pub fn normalize_path(path: &str) -> String {
        path.split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Look up a single path.
    pub fn get(&self, path: &str) -> Option<TreeEntry> {
        let path = Self::normalize_path(path);
        if path.is_empty() {
            return None;
        }
        self.by_path.get(&path).map(|&id| self.nodes[id].entry())
    }

    /// Look up a file that can be fetched.
    pub fn file(&self, path: &str) -> Result<TreeEntry, HubError> {
        match self.get(path) {
            Some(entry) if !entry.is_dir() => Ok(entry),
            _ => Err(HubError::NotFound(path.to_string())),
        }
    }

    /// Entries at the repository root.
    pub fn top_level(&self) -> TreeView {
        self.children_of("")
    }

    /// Immediate children of `folder`.
    ///
    /// Returns an empty view when the folder does not exist or names a file.
    /// The result depends only on the snapshot and the path, so repeated
    /// calls always yield the same entries in the same order.
    pub fn children_of(&self, folder: &str) -> TreeView {
        let folder = Self::normalize_path(folder);
        let Some(&id) = self.by_path.get(&folder) else {
            return Vec::new();
        };

        let node = &self.nodes[id];
        if !node.kind.is_dir() {
            return Vec::new();
        }

        let mut items: Vec<TreeEntry> = node
            .children
            .iter()
            .map(|&child| self.nodes[child].entry())
            .collect();
        items.sort_by(compare_entries);
        items
    }

    /// Like [`children_of`](Self::children_of), but reports a missing folder.
    pub fn try_children_of(&self, folder: &str) -> Result<TreeView, HubError> {
        match self.get(folder) {
            Some(entry) if entry.is_dir() => Ok(self.children_of(folder)),
            _ if Self::normalize_path(folder).is_empty() => Ok(self.top_level()),
            _ => Err(HubError::NotFound(folder.to_string())),
        }
    }
}

/// Directories before files, then by name.
///
/// Names compare case-insensitively first so `b.js` sorts between `A.js`
/// and `C.js`. Names equal but for case put the lowercase spelling first.
pub fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| compare_names(&a.name, &b.name))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
