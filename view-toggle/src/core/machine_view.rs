//! Append the templated `MachineView` block after the human view.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::markers::{FRAGMENT_OPEN, FRAGMENT_PREFIX, HUMAN_VIEW_CLOSE, MACHINE_VIEW_OPEN};
use crate::core::types::{StepOutcome, StepResult};

static RETURN_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"return\s+\(").unwrap());

const BOOK_DEMO_URL: &str = "https://cal.com/adamwolfe/cursive-ai-audit";
const PRICING_URL: &str = "https://meetcursive.com/pricing";

/// Render the machine-view placeholder block for a page.
///
/// Ends with the closing `</>` of the top-level fragment.
pub fn render_machine_block(display_name: &str) -> String {
    let title = display_name.to_uppercase();
    format!(
        r#"

  {{/* Machine View - AEO-Optimized */}}
  <MachineView>
    <MachineContent>
      {{/* Header */}}
      <div className="mb-12 pb-6 border-b border-gray-200">
        <h1 className="text-2xl text-gray-900 font-bold mb-4">{title}</h1>
        <p className="text-gray-700 leading-relaxed">
          [Page description for AI/machine readers]
        </p>
      </div>

      {{/* Key Information */}}
      <MachineSection title="Overview">
        <p className="text-gray-700 mb-4">
          [Add machine-readable content here]
        </p>
      </MachineSection>

      {{/* Contact */}}
      <MachineSection title="Learn More">
        <MachineList items={{[
          {{
            label: "Book a Demo",
            href: "{BOOK_DEMO_URL}",
            description: "Schedule a personalized walkthrough"
          }},
          {{
            label: "View Pricing",
            href: "{PRICING_URL}"
          }}
        ]}} />
      </MachineSection>

    </MachineContent>
  </MachineView>
</>"#
    )
}

/// Insert the machine-view block after the last `</HumanView>`.
///
/// Returns the step result and whether a top-level fragment opener had to be
/// added after `return (`.
pub fn inject_machine_view(text: &str, display_name: &str) -> (StepResult, bool) {
    if text.contains(MACHINE_VIEW_OPEN) {
        return (StepResult::unchanged(text, StepOutcome::AlreadyPresent), false);
    }
    let Some(close) = text.rfind(HUMAN_VIEW_CLOSE) else {
        return (StepResult::unchanged(text, StepOutcome::PatternNotFound), false);
    };

    let insert_at = close + HUMAN_VIEW_CLOSE.len();
    let block = render_machine_block(display_name);
    let mut out = String::with_capacity(text.len() + block.len() + FRAGMENT_PREFIX.len());
    out.push_str(&text[..insert_at]);
    out.push_str(&block);
    out.push_str(&text[insert_at..]);

    let fragment_inserted = ensure_fragment_open(&mut out);
    (StepResult::changed(out, StepOutcome::Applied), fragment_inserted)
}

/// Open a fragment right after the first `return (` unless one is there.
fn ensure_fragment_open(text: &mut String) -> bool {
    let Some(found) = RETURN_OPEN_RE.find(text) else {
        return false;
    };
    let after = &text[found.end()..];
    let rest = after.trim_start();
    if rest.starts_with(FRAGMENT_OPEN) {
        return false;
    }
    let insert_at = found.end() + (after.len() - rest.len());
    text.insert_str(insert_at, FRAGMENT_PREFIX);
    true
}
