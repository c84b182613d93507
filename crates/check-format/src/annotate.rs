use fence_core::LineRange;

/// Fixed message attached to every annotation.
pub(crate) const VIOLATION_MESSAGE: &str = "Formatting problems detected in lines changed by \
     this PR. Run the formatter only on your changes or fix manual edits.";

/// One GitHub error annotation for a violating range. The format and
/// field names are consumed verbatim by the CI display and must not
/// change.
pub(crate) fn error_annotation(path: &str, range: &LineRange) -> String {
    format!(
        "::error file={path},line={},endLine={}::{VIOLATION_MESSAGE}",
        range.start, range.end
    )
}
