//! I/O helpers for view-toggle commands.

pub mod config;
pub mod page_file;
