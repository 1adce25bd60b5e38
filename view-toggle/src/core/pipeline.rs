//! Compose the three rewrite steps into one per-document transform.

use crate::core::human_view::wrap_human_view;
use crate::core::importer::ensure_import;
use crate::core::machine_view::inject_machine_view;
use crate::core::markers::{HUMAN_VIEW_NAME, MACHINE_VIEW_NAME};
use crate::core::types::{StepReport, Transformed};

/// True when a page already mentions both view components.
pub fn has_toggle(text: &str) -> bool {
    text.contains(HUMAN_VIEW_NAME) && text.contains(MACHINE_VIEW_NAME)
}

/// Apply import, human-view and machine-view steps in order.
pub fn transform(text: &str, display_name: &str) -> Transformed {
    let imported = ensure_import(text);
    let wrapped = wrap_human_view(&imported.text);
    let (injected, fragment_inserted) = inject_machine_view(&wrapped.text, display_name);

    Transformed {
        text: injected.text,
        report: StepReport {
            import: imported.outcome,
            human_view: wrapped.outcome,
            machine_view: injected.outcome,
            fragment_inserted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markers::{HUMAN_VIEW_CLOSE, HUMAN_VIEW_OPEN, VIEW_WRAPPER_IMPORT};
    use crate::core::types::StepOutcome;
    use crate::test_support::{PAGE_WITH_FRAGMENT, PAGE_WITHOUT_CLOSER, SIMPLE_PAGE};

    #[test]
    fn pricing_scenario() {
        let out = transform(SIMPLE_PAGE, "Pricing");
        assert_eq!(
            out.report,
            StepReport {
                import: StepOutcome::Applied,
                human_view: StepOutcome::Applied,
                machine_view: StepOutcome::Applied,
                fragment_inserted: true,
            }
        );

        let text = &out.text;
        assert!(text.starts_with(&format!(
            "import {{ Metadata }} from \"next\"\n{VIEW_WRAPPER_IMPORT}\n"
        )));
        let fragment = text.find("return (\n    \n    <>").expect("fragment opener");
        let open = text.find(HUMAN_VIEW_OPEN).expect("human open");
        let main_open = text.find("<main").expect("main open");
        let main_close = text.find("</main>").expect("main close");
        let close = text.find(HUMAN_VIEW_CLOSE).expect("human close");
        let machine = text.find("<MachineView>").expect("machine view");
        assert!(fragment < open);
        assert!(open < main_open && main_close < close && close < machine);
        assert!(text.contains(">PRICING</h1>"));
        assert!(text.contains("label: \"Book a Demo\""));
        assert!(text.contains("label: \"View Pricing\""));
        assert!(text.contains("</MachineView>\n</>\n  )"));
    }

    #[test]
    fn existing_fragment_is_reused() {
        let out = transform(PAGE_WITH_FRAGMENT, "Faq");
        assert_eq!(out.report.machine_view, StepOutcome::Applied);
        assert!(!out.report.fragment_inserted);
        assert_eq!(out.text.matches("<>").count(), 1);
    }

    #[test]
    fn pipeline_is_idempotent() {
        for page in [SIMPLE_PAGE, PAGE_WITH_FRAGMENT, PAGE_WITHOUT_CLOSER] {
            let once = transform(page, "Pricing");
            let twice = transform(&once.text, "Pricing");
            assert_eq!(twice.text, once.text);
        }
    }

    #[test]
    fn second_pass_reports_markers_present() {
        let once = transform(SIMPLE_PAGE, "Pricing");
        let twice = transform(&once.text, "Pricing");
        assert_eq!(twice.report.import, StepOutcome::AlreadyPresent);
        assert_eq!(twice.report.human_view, StepOutcome::AlreadyPresent);
        assert_eq!(twice.report.machine_view, StepOutcome::AlreadyPresent);
        assert!(has_toggle(&once.text));
    }

    #[test]
    fn missing_closer_is_partial_and_skips_machine_view() {
        let out = transform(PAGE_WITHOUT_CLOSER, "Pricing");
        assert_eq!(out.report.human_view, StepOutcome::Partial);
        assert_eq!(out.report.machine_view, StepOutcome::PatternNotFound);
        assert!(out.text.contains(HUMAN_VIEW_OPEN));
        assert!(!out.text.contains(HUMAN_VIEW_CLOSE));
    }

    #[test]
    fn page_without_main_only_gains_import() {
        let text = "import A from \"a\"\n\nexport default function P() {\n  return (\n    <div />\n  )\n}\n";
        let out = transform(text, "Pricing");
        assert_eq!(out.report.import, StepOutcome::Applied);
        assert_eq!(out.report.human_view, StepOutcome::PatternNotFound);
        assert_eq!(out.report.machine_view, StepOutcome::PatternNotFound);
        assert!(out.report.human_view.is_degraded());
    }
}
