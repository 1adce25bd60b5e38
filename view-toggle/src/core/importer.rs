//! Ensure the view-wrapper import is present.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::markers::{HUMAN_VIEW_NAME, MACHINE_VIEW_NAME, VIEW_WRAPPER_IMPORT};
use crate::core::types::{StepOutcome, StepResult};

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^import\s+.*from\s+["'].*["']"#).unwrap());

/// Insert the view-wrapper import after the last import statement.
///
/// Any mention of either view component counts as already imported. The
/// whole document is scanned, not just a header block. Text without import
/// statements is returned unchanged.
pub fn ensure_import(text: &str) -> StepResult {
    if text.contains(HUMAN_VIEW_NAME) || text.contains(MACHINE_VIEW_NAME) {
        return StepResult::unchanged(text, StepOutcome::AlreadyPresent);
    }

    let Some(last) = IMPORT_RE.find_iter(text).last() else {
        return StepResult::unchanged(text, StepOutcome::PatternNotFound);
    };

    let insert_at = last.end();
    let mut out = String::with_capacity(text.len() + VIEW_WRAPPER_IMPORT.len() + 1);
    out.push_str(&text[..insert_at]);
    out.push('\n');
    out.push_str(VIEW_WRAPPER_IMPORT);
    out.push_str(&text[insert_at..]);
    StepResult::changed(out, StepOutcome::Applied)
}
