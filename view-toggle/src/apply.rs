//! Driver for `view-toggle apply` and `view-toggle check`.
//!
//! Walks the configured page list in order, runs the pipeline on each page
//! and writes back only pages whose text changed. Per-page problems are
//! reported, never raised; only genuine I/O failures return an error.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::page_name::display_name;
use crate::core::pipeline::{has_toggle, transform};
use crate::core::types::StepReport;
use crate::io::config::ToggleConfig;
use crate::io::page_file::{read_page, write_page};

/// Whether changed pages are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// Terminal state for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Path does not exist.
    NotFound,
    /// Page already mentions both view components.
    AlreadyToggled,
    /// Text changed (and was written unless in dry-run mode).
    Updated(StepReport),
    /// Every step was a no-op.
    NoChanges(StepReport),
}

impl PageOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, PageOutcome::Updated(_))
    }

    /// Step outcomes, when the pipeline ran.
    pub fn report(&self) -> Option<&StepReport> {
        match self {
            PageOutcome::Updated(report) | PageOutcome::NoChanges(report) => Some(report),
            PageOutcome::NotFound | PageOutcome::AlreadyToggled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub path: PathBuf,
    pub outcome: PageOutcome,
}

/// Outcomes for a full run, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: Vec<PageResult>,
}

impl RunSummary {
    pub fn updated_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| page.outcome.is_updated())
            .count()
    }
}

/// Process every configured page and print the progress report to `out`.
pub fn run(cfg: &ToggleConfig, mode: Mode, out: &mut impl Write) -> Result<RunSummary> {
    let header = match mode {
        Mode::Write => "Adding Human/Machine toggle to pages...",
        Mode::DryRun => "Checking Human/Machine toggle on pages...",
    };
    writeln!(out, "{header}\n").context("write report")?;

    let mut summary = RunSummary::default();
    for path in &cfg.pages {
        let outcome = process_page(path, &cfg.root_dir_name, mode, &mut *out)?;
        summary.pages.push(PageResult {
            path: path.clone(),
            outcome,
        });
    }

    let updated = summary.updated_count();
    let footer = match mode {
        Mode::Write => writeln!(out, "\n✓ Updated {updated} pages"),
        Mode::DryRun => writeln!(out, "\n{updated} pages would be updated"),
    };
    footer.context("write report")?;
    info!(updated, total = summary.pages.len(), "run finished");
    Ok(summary)
}

/// Run the pipeline on one page, writing it back if it changed.
pub fn process_page(
    path: &Path,
    root_dir_name: &str,
    mode: Mode,
    out: &mut impl Write,
) -> Result<PageOutcome> {
    writeln!(out, "Processing: {}", path.display()).context("write report")?;

    let Some(original) = read_page(path)? else {
        writeln!(out, "  SKIP: File not found").context("write report")?;
        return Ok(PageOutcome::NotFound);
    };

    if has_toggle(&original) {
        writeln!(out, "  SKIP: Already has toggle").context("write report")?;
        return Ok(PageOutcome::AlreadyToggled);
    }

    let name = display_name(path, root_dir_name);
    let transformed = transform(&original, &name);
    log_steps(path, &transformed.report);

    if transformed.text == original {
        writeln!(out, "  SKIP: No changes needed").context("write report")?;
        return Ok(PageOutcome::NoChanges(transformed.report));
    }

    match mode {
        Mode::Write => {
            write_page(path, &transformed.text)?;
            info!(path = %path.display(), name = %name, "page updated");
            writeln!(out, "  ✓ Updated").context("write report")?;
        }
        Mode::DryRun => {
            writeln!(out, "  WOULD UPDATE").context("write report")?;
        }
    }
    Ok(PageOutcome::Updated(transformed.report))
}

fn log_steps(path: &Path, report: &StepReport) {
    for (step, outcome) in report.steps() {
        if outcome.is_degraded() {
            warn!(path = %path.display(), step, %outcome, "step did not apply");
        } else {
            debug!(path = %path.display(), step, %outcome, "step finished");
        }
    }
    if report.fragment_inserted {
        debug!(path = %path.display(), "opened top-level fragment");
    }
}
