//! Inject the Human/Machine view toggle into marketing page sources.
//!
//! Each page gets three text rewrites: the view-wrapper import, a
//! `HumanView` around its `<main>` block, and a templated `MachineView`
//! placeholder. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure rewrites on page text. No I/O; every step reports a
//!   [`core::types::StepOutcome`] so missing structure is observable.
//! - **[`io`]**: Config loading and page file access.
//!
//! [`apply`] drives the pipeline across the configured page list.

pub mod apply;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
