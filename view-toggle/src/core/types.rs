//! Shared deterministic types for the rewrite steps.
//!
//! Every step reports what it did alongside the rewritten text so callers can
//! tell "nothing to do" apart from "expected structure missing".

use std::fmt;

/// Result classification for a single rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step changed the text.
    Applied,
    /// The opening marker was inserted but no matching closing landmark was
    /// found, leaving the wrapper unbalanced.
    Partial,
    /// The step's marker was already present; text unchanged.
    AlreadyPresent,
    /// The landmark the step anchors on is absent; text unchanged.
    PatternNotFound,
}

impl StepOutcome {
    /// True when the step left the document without its intended structure.
    pub fn is_degraded(self) -> bool {
        matches!(self, StepOutcome::Partial | StepOutcome::PatternNotFound)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepOutcome::Applied => "applied",
            StepOutcome::Partial => "partial",
            StepOutcome::AlreadyPresent => "already present",
            StepOutcome::PatternNotFound => "pattern not found",
        };
        f.write_str(label)
    }
}

/// Text produced by one step together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub text: String,
    pub outcome: StepOutcome,
}

impl StepResult {
    pub fn unchanged(text: &str, outcome: StepOutcome) -> Self {
        Self {
            text: text.to_string(),
            outcome,
        }
    }

    pub fn changed(text: String, outcome: StepOutcome) -> Self {
        Self { text, outcome }
    }
}

/// Per-step outcomes recorded by the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub import: StepOutcome,
    pub human_view: StepOutcome,
    pub machine_view: StepOutcome,
    /// Whether the machine-view step had to open a top-level fragment.
    pub fragment_inserted: bool,
}

impl StepReport {
    /// Step names paired with their outcomes, for logging.
    pub fn steps(&self) -> [(&'static str, StepOutcome); 3] {
        [
            ("import", self.import),
            ("human_view", self.human_view),
            ("machine_view", self.machine_view),
        ]
    }
}

/// Full pipeline output for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub report: StepReport,
}
