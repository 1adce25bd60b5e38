//! Pure text rewrites applied to a single page.
//!
//! Core modules must be free of I/O side effects. They take page text and
//! return new text plus a [`types::StepOutcome`] describing what happened.

pub mod human_view;
pub mod importer;
pub mod machine_view;
pub mod markers;
pub mod page_name;
pub mod pipeline;
pub mod types;
