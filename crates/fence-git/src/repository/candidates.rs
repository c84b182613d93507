use std::collections::BTreeSet;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Files worth diffing for formatter collateral: changed between `base`
    /// and HEAD, and also carrying unstaged modifications in the working
    /// tree. Paths are repository-relative and sorted.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `base` cannot be resolved.
    pub fn candidate_files(&self, base: &str) -> Result<Vec<String>> {
        let worktree = self.worktree_modified_files()?;
        if worktree.is_empty() {
            // Nothing touched after HEAD, so nothing to check.
            return Ok(Vec::new());
        }

        let changed = self.changed_files(base, "HEAD")?;

        Ok(changed.intersection(&worktree).cloned().collect())
    }

    /// Paths changed between two revisions, preferring the head-side path
    /// for renames and copies since that is the path the working tree has.
    fn changed_files(&self, base: &str, head: &str) -> Result<BTreeSet<String>> {
        let base_tree = self.resolve_tree(base)?;
        let head_tree = self.resolve_tree(head)?;

        let mut diff =
            self.inner
                .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        find_opts.copies(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut files = BTreeSet::new();
        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .ok_or(GitError::MissingDeltaPath)?;
            files.insert(path.to_string_lossy().into_owned());
        }

        Ok(files)
    }

    /// Tracked files with unstaged modifications (index vs working tree).
    /// Untracked files are excluded; they cannot be part of the PR diff.
    fn worktree_modified_files(&self) -> Result<BTreeSet<String>> {
        let diff = self.inner.diff_index_to_workdir(None, None)?;

        let mut files = BTreeSet::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.old_file().path().or_else(|| delta.new_file().path()) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }

        Ok(files)
    }
}
