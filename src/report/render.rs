//! Report rendering and the readiness verdict.

use crate::ui::UserInterface;

use super::collector::ReportCollector;

/// The three-state summary derived from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessSummary {
    /// Zero issues, zero warnings.
    FullyReady,
    /// Zero issues, at least one warning.
    ReadyWithWarnings { warnings: usize },
    /// At least one issue, regardless of warning count.
    NotReady { issues: usize, warnings: usize },
}

impl ReadinessSummary {
    /// Derive the summary from a collector's final state.
    pub fn from_collector(collector: &ReportCollector) -> Self {
        match (collector.issue_count(), collector.warning_count()) {
            (0, 0) => Self::FullyReady,
            (0, warnings) => Self::ReadyWithWarnings { warnings },
            (issues, warnings) => Self::NotReady { issues, warnings },
        }
    }

    /// The readiness verdict this summary maps to.
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::NotReady { .. })
    }
}

/// Renders a finished collector as grouped, human-readable output.
pub struct Reporter;

impl Reporter {
    /// Render all successes, then all warnings, then all issues, each as
    /// one line per entry in insertion order, followed by the summary.
    ///
    /// Returns the readiness verdict for exit-code mapping.
    pub fn render(collector: &ReportCollector, ui: &mut dyn UserInterface) -> bool {
        ui.show_header("Readiness report");

        if !collector.successes().is_empty() {
            ui.message("Passed:");
            for entry in collector.successes() {
                ui.success(&entry.message);
            }
            ui.message("");
        }

        if !collector.warnings().is_empty() {
            ui.message("Warnings:");
            for entry in collector.warnings() {
                ui.warning(&entry.message);
            }
            ui.message("");
        }

        if !collector.issues().is_empty() {
            ui.message("Issues:");
            for entry in collector.issues() {
                ui.error(&entry.message);
            }
            ui.message("");
        }

        let summary = ReadinessSummary::from_collector(collector);
        match summary {
            ReadinessSummary::FullyReady => {
                ui.success("System is ready to run");
            }
            ReadinessSummary::ReadyWithWarnings { warnings } => {
                ui.warning(&format!("System is ready, with {} warning(s)", warnings));
            }
            ReadinessSummary::NotReady { issues, warnings } => {
                ui.error(&format!(
                    "System is not ready: {} issue(s), {} warning(s)",
                    issues, warnings
                ));
                ui.message("Fix the issues above before starting the system");
            }
        }

        summary.is_ready()
    }
}
