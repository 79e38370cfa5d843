//! Expand/collapse state of one folder row.

use crate::tree::{RepoTree, TreeView};

/// Per-folder presentational state.
///
/// Children are computed from the in-memory tree on the first expansion and
/// kept for later expansions of the same row. Nothing here survives the
/// row itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderExpansion {
    expanded: bool,
    children: Option<TreeView>,
}

impl FolderExpansion {
    pub fn collapsed() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the row open or closed, returning the new `expanded` value.
    pub fn toggle(&mut self, tree: &RepoTree, folder: &str) -> bool {
        if !self.expanded && self.children.is_none() {
            self.children = Some(tree.children_of(folder));
        }
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Children to render, or `None` while collapsed.
    pub fn visible_children(&self) -> Option<&TreeView> {
        if self.expanded {
            self.children.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::{FileEntry, RepoSnapshot};

    fn tree() -> RepoTree {
        RepoTree::from_snapshot(&RepoSnapshot {
            repo_id: "r".to_string(),
            pushed_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            files: vec![
                FileEntry::file("src/b.js", 2),
                FileEntry::file("src/a.js", 1),
                FileEntry::file("src/lib/c.js", 3),
            ],
        })
    }

    #[test]
    fn test_starts_collapsed() {
        let state = FolderExpansion::collapsed();
        assert!(!state.is_expanded());
        assert!(state.visible_children().is_none());
    }

    #[test]
    fn test_toggle_twice_restores_collapsed() {
        let tree = tree();
        let mut state = FolderExpansion::collapsed();

        assert!(state.toggle(&tree, "src"));
        assert_eq!(state.visible_children().unwrap().len(), 3);

        assert!(!state.toggle(&tree, "src"));
        assert!(!state.is_expanded());
        assert!(state.visible_children().is_none());
    }

    #[test]
    fn test_repeated_cycles_render_identically() {
        let tree = tree();
        let mut state = FolderExpansion::collapsed();

        state.toggle(&tree, "src");
        let first = state.visible_children().cloned();
        state.toggle(&tree, "src");
        state.toggle(&tree, "src");
        let second = state.visible_children().cloned();

        assert_eq!(first, second);
        assert_eq!(second.unwrap(), tree.children_of("src"));
    }

    #[test]
    fn test_expanding_missing_folder_is_empty() {
        let tree = tree();
        let mut state = FolderExpansion::collapsed();
        state.toggle(&tree, "ghost");
        assert_eq!(state.visible_children().map(Vec::len), Some(0));
    }
}
