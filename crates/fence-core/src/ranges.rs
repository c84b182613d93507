use diffy::Line;

use crate::LineRange;

/// Which coordinate space a changed range is reported in.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Old-side line numbers: replace and delete segments.
    Old,
    /// New-side line numbers: replace and insert segments.
    New,
}

/// Ranges in `new_text` that were inserted or replaced relative to
/// `old_text`, as inclusive 1-based line ranges.
///
/// Pure deletions are not reported; they have no lines in the new
/// coordinate space. Identical inputs yield an empty vector.
#[must_use]
pub fn changed_ranges_in_new(old_text: &str, new_text: &str) -> Vec<LineRange> {
    changed_ranges(old_text, new_text, Side::New)
}

/// Ranges in `old_text` that were replaced or deleted relative to
/// `new_text`, as inclusive 1-based line ranges.
///
/// Pure inserts are not reported; they have no lines in the old
/// coordinate space.
#[must_use]
pub fn changed_ranges_in_old(old_text: &str, new_text: &str) -> Vec<LineRange> {
    changed_ranges(old_text, new_text, Side::Old)
}

fn changed_ranges(old_text: &str, new_text: &str, side: Side) -> Vec<LineRange> {
    // Compare line content only: a missing trailing newline must not
    // manufacture a diff on the last line.
    let old_text = normalized(old_text);
    let new_text = normalized(new_text);
    if old_text == new_text {
        return Vec::new();
    }

    let patch = diffy::create_patch(&old_text, &new_text);
    let mut ranges = Vec::new();

    for hunk in patch.hunks() {
        // Line counters in unified-diff coordinates (1-based).
        let mut old_pos = hunk.old_range().start();
        let mut new_pos = hunk.new_range().start();

        // A run is a maximal block of non-context lines: deletes only is a
        // pure deletion, inserts only a pure insert, both a replace.
        let mut run_old_start = old_pos;
        let mut run_new_start = new_pos;
        let mut deleted = 0usize;
        let mut inserted = 0usize;

        for line in hunk.lines() {
            match line {
                Line::Context(_) => {
                    push_run(&mut ranges, side, run_old_start, deleted, run_new_start, inserted);
                    deleted = 0;
                    inserted = 0;
                    old_pos += 1;
                    new_pos += 1;
                    run_old_start = old_pos;
                    run_new_start = new_pos;
                }
                Line::Delete(_) => {
                    deleted += 1;
                    old_pos += 1;
                }
                Line::Insert(_) => {
                    inserted += 1;
                    new_pos += 1;
                }
            }
        }
        push_run(&mut ranges, side, run_old_start, deleted, run_new_start, inserted);
    }

    ranges
}

fn push_run(
    ranges: &mut Vec<LineRange>,
    side: Side,
    old_start: usize,
    deleted: usize,
    new_start: usize,
    inserted: usize,
) {
    match side {
        // Replace and delete segments both remove old-side lines.
        Side::Old if deleted > 0 => {
            ranges.push(LineRange::new(old_start, old_start + deleted - 1));
        }
        // Replace and insert segments both add new-side lines.
        Side::New if inserted > 0 => {
            ranges.push(LineRange::new(new_start, new_start + inserted - 1));
        }
        _ => {}
    }
}

fn normalized(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(lines: &[&str]) -> String {
        let mut text = lines.join("\n");
        if !lines.is_empty() {
            text.push('\n');
        }
        text
    }

    #[test]
    fn identical_inputs_yield_no_ranges() {
        let text = joined(&["a", "b", "c"]);
        assert!(changed_ranges_in_new(&text, &text).is_empty());
        assert!(changed_ranges_in_old(&text, &text).is_empty());
    }

    #[test]
    fn appended_line_is_reported_in_new() {
        let old = joined(&["A"]);
        let new = joined(&["A", "B"]);
        assert_eq!(changed_ranges_in_new(&old, &new), vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn replaced_middle_line_is_reported_in_new() {
        let old = joined(&["A", "B", "C"]);
        let new = joined(&["A", "X", "C"]);
        assert_eq!(changed_ranges_in_new(&old, &new), vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn replaced_middle_line_is_reported_in_old() {
        let old = joined(&["A", "B", "C"]);
        let new = joined(&["A", "X", "C"]);
        assert_eq!(changed_ranges_in_old(&old, &new), vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn pure_deletion_is_invisible_in_new() {
        let old = joined(&["A", "B", "C"]);
        let new = joined(&["A", "C"]);
        assert!(changed_ranges_in_new(&old, &new).is_empty());
    }

    #[test]
    fn pure_insert_is_invisible_in_old() {
        let old = joined(&["A", "C"]);
        let new = joined(&["A", "B", "C"]);
        assert!(changed_ranges_in_old(&old, &new).is_empty());
    }

    #[test]
    fn deletion_is_reported_in_old() {
        let old = joined(&["A", "B", "C"]);
        let new = joined(&["A", "C"]);
        assert_eq!(changed_ranges_in_old(&old, &new), vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn empty_old_reports_whole_new_file() {
        let new = joined(&["x", "y", "z"]);
        assert_eq!(changed_ranges_in_new("", &new), vec![LineRange::new(1, 3)]);
    }

    #[test]
    fn empty_inputs_yield_no_ranges() {
        assert!(changed_ranges_in_new("", "").is_empty());
        assert!(changed_ranges_in_old("", "").is_empty());
    }

    #[test]
    fn trailing_newline_difference_is_not_a_change() {
        assert!(changed_ranges_in_new("a\nb\n", "a\nb").is_empty());
        assert!(changed_ranges_in_old("a\nb", "a\nb\n").is_empty());
    }

    #[test]
    fn distant_edits_produce_separate_ranges() {
        let old: Vec<String> = (1..=40).map(|n| format!("line {n}")).collect();
        let mut new = old.clone();
        new[4] = "changed five".to_string();
        new[29] = "changed thirty".to_string();

        let old_refs: Vec<&str> = old.iter().map(String::as_str).collect();
        let new_refs: Vec<&str> = new.iter().map(String::as_str).collect();
        let ranges = changed_ranges_in_new(&joined(&old_refs), &joined(&new_refs));

        assert_eq!(ranges, vec![LineRange::new(5, 5), LineRange::new(30, 30)]);
    }

    #[test]
    fn multi_line_replace_covers_the_block() {
        let old = joined(&["a", "b", "c", "d"]);
        let new = joined(&["a", "x", "y", "d"]);
        assert_eq!(changed_ranges_in_new(&old, &new), vec![LineRange::new(2, 3)]);
        assert_eq!(changed_ranges_in_old(&old, &new), vec![LineRange::new(2, 3)]);
    }
}
