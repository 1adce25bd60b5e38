//! Wrap the page's `<main>` block in a `HumanView`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::markers::{
    HUMAN_VIEW_OPEN, HUMAN_VIEW_PREFIX, HUMAN_VIEW_SUFFIX, MAIN_CLOSE, MAIN_OPEN,
};
use crate::core::types::{StepOutcome, StepResult};

static RETURN_MAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"return\s+\(\s*(?:<>)?\s*<main").unwrap());

/// `</main>` followed by an optional fragment close and the closing paren.
static MAIN_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</main>\s*(?:</>\s*)?\s*\)").unwrap());

/// Wrap the first `return ( <main ...> ... </main> )` block.
///
/// The opener is inserted before `<main`; the closer after the first
/// `</main>` that is followed by `)` (optionally through `</>`). When the
/// closer landmark is missing the opener still lands and the outcome is
/// [`StepOutcome::Partial`].
pub fn wrap_human_view(text: &str) -> StepResult {
    if text.contains(HUMAN_VIEW_OPEN) {
        return StepResult::unchanged(text, StepOutcome::AlreadyPresent);
    }

    let Some(found) = RETURN_MAIN_RE.find(text) else {
        return StepResult::unchanged(text, StepOutcome::PatternNotFound);
    };

    let main_start = found.end() - MAIN_OPEN.len();
    let mut out = String::with_capacity(
        text.len() + HUMAN_VIEW_PREFIX.len() + HUMAN_VIEW_SUFFIX.len(),
    );
    out.push_str(&text[..main_start]);
    out.push_str(HUMAN_VIEW_PREFIX);
    out.push_str(&text[main_start..]);

    let search_from = main_start + HUMAN_VIEW_PREFIX.len();
    let Some(close) = MAIN_CLOSE_RE.find_at(&out, search_from) else {
        return StepResult::changed(out, StepOutcome::Partial);
    };

    let close_end = close.start() + MAIN_CLOSE.len();
    out.insert_str(close_end, HUMAN_VIEW_SUFFIX);
    StepResult::changed(out, StepOutcome::Applied)
}
