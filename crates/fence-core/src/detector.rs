use std::collections::BTreeMap;

use crate::{LineRange, changed_ranges_in_new, changed_ranges_in_old};

/// Violating line ranges per file path, in sorted path order.
pub type Violations = BTreeMap<String, Vec<LineRange>>;

/// Detect working-tree edits that land on lines a pull request itself
/// changed.
///
/// Each candidate file is read at three points: the PR's base revision,
/// its head revision, and the current working tree. Lines the PR changed
/// are taken from the base→head diff in head coordinates; lines altered
/// after head (by a formatter or a manual edit) are taken from the
/// head→worktree diff, also in head coordinates. Any of the latter that
/// overlaps any of the former is a violation.
///
/// Stateless: calling this twice with the same snapshots yields the same
/// map.
pub fn find_violations<B, H, W>(
    candidate_files: &[String],
    base_of: B,
    head_of: H,
    worktree_of: W,
) -> Violations
where
    B: Fn(&str) -> String,
    H: Fn(&str) -> String,
    W: Fn(&str) -> String,
{
    let mut violations = Violations::new();

    for path in candidate_files {
        let base = base_of(path);
        let head = head_of(path);

        // Lines this PR added or modified, in head coordinates.
        let ranges_head = changed_ranges_in_new(&base, &head);
        if ranges_head.is_empty() {
            continue;
        }

        // Lines touched since head, measured on the head side so they share
        // a coordinate space with `ranges_head`. Pure inserts are skipped.
        let worktree = worktree_of(path);
        let ranges_wt = changed_ranges_in_old(&head, &worktree);
        if ranges_wt.is_empty() {
            continue;
        }

        let violating: Vec<LineRange> = ranges_wt
            .into_iter()
            .filter(|range| ranges_head.iter().any(|own| range.overlaps(own)))
            .collect();

        if !violating.is_empty() {
            violations.insert(path.clone(), violating);
        }
    }

    violations
}
