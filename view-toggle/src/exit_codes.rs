//! Stable exit codes for view-toggle commands.

/// Command finished. Per-page skips never change this.
pub const OK: i32 = 0;
/// Invalid config or an I/O error on an existing page.
pub const INVALID: i32 = 1;
/// `view-toggle check` found pages that would be updated.
pub const PENDING: i32 = 2;
