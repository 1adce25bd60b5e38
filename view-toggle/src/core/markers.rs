//! Literal markers and inserted snippets.
//!
//! Marker presence doubles as the idempotency flag for each step, so these
//! strings must match what the steps emit byte for byte.

/// Component names whose presence means the import is already handled.
pub const HUMAN_VIEW_NAME: &str = "HumanView";
pub const MACHINE_VIEW_NAME: &str = "MachineView";

pub const HUMAN_VIEW_OPEN: &str = "<HumanView>";
pub const HUMAN_VIEW_CLOSE: &str = "</HumanView>";
pub const MACHINE_VIEW_OPEN: &str = "<MachineView>";

pub const FRAGMENT_OPEN: &str = "<>";
pub const MAIN_OPEN: &str = "<main";
pub const MAIN_CLOSE: &str = "</main>";

pub const VIEW_WRAPPER_IMPORT: &str = r#"import { HumanView, MachineView, MachineContent, MachineSection, MachineList } from "@/components/view-wrapper""#;

/// Inserted immediately before the located `<main` tag.
pub const HUMAN_VIEW_PREFIX: &str = "{/* Human View */}\n      <HumanView>\n        ";

/// Inserted immediately after the matching `</main>`.
pub const HUMAN_VIEW_SUFFIX: &str = "\n  </HumanView>";

/// Inserted after `return (` when the page lacks a top-level fragment.
pub const FRAGMENT_PREFIX: &str = "\n    <>\n      ";
