use std::path::Path;

use crate::Result;

use super::Repository;

impl Repository {
    /// Blob content at a revision, decoded lossily as UTF-8.
    ///
    /// A path absent from the revision's tree yields the empty string;
    /// that is how file adds and deletes between revisions present
    /// themselves, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::RefNotFound`] if `refspec` cannot be
    /// resolved.
    pub fn revision_content(&self, refspec: &str, path: &str) -> Result<String> {
        let tree = self.resolve_tree(refspec)?;

        let Ok(entry) = tree.get_path(Path::new(path)) else {
            return Ok(String::new());
        };
        let Ok(object) = entry.to_object(&self.inner) else {
            return Ok(String::new());
        };
        let Some(blob) = object.as_blob() else {
            return Ok(String::new());
        };

        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }

    /// On-disk content of a repository-relative path. Unreadable files
    /// yield the empty string.
    #[must_use]
    pub fn worktree_content(&self, path: &str) -> String {
        match std::fs::read(self.root().join(path)) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }
}
