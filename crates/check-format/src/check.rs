use std::path::Path;

use fence_core::find_violations;
use fence_git::Repository;

use crate::annotate;
use crate::error::Result;

pub(crate) enum Outcome {
    Clean,
    ViolationsFound,
}

/// Compare base, HEAD, and working-tree snapshots of every candidate
/// file and emit one annotation per violating range.
pub(crate) fn run(base: &str, start_path: &Path) -> Result<Outcome> {
    let repo = Repository::open(start_path)?;

    let candidate_files = repo.candidate_files(base)?;
    if candidate_files.is_empty() {
        return Ok(Outcome::Clean);
    }

    // Snapshot reads treat missing paths as empty content; that is how
    // file adds and deletes between the revisions present themselves.
    let violations = find_violations(
        &candidate_files,
        |path| repo.revision_content(base, path).unwrap_or_default(),
        |path| repo.revision_content("HEAD", path).unwrap_or_default(),
        |path| repo.worktree_content(path),
    );

    if violations.is_empty() {
        return Ok(Outcome::Clean);
    }

    // Annotations go to stdout; that is where the CI display reads them.
    for (path, ranges) in &violations {
        for range in ranges {
            println!("{}", annotate::error_annotation(path, range));
        }
    }

    Ok(Outcome::ViolationsFound)
}
