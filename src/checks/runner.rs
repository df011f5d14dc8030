//! Check execution with fault isolation.

use crate::error::GantryError;
use crate::report::ReportCollector;

use super::{CheckContext, CheckDefinition};

/// Bookkeeping record for one executed check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Name of the check that ran.
    pub name: &'static str,
    /// The check's own pass/fail signal; not consulted by the verdict.
    pub passed: bool,
}

/// Drives the declared checks in order, exactly once each.
///
/// A check that returns an error is converted into a single issue entry
/// naming the check and the fault, and the run proceeds. No fault aborts
/// the remaining checks, and nothing is ever retried.
pub struct CheckRunner<'a> {
    ctx: &'a CheckContext,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner over a shared context.
    pub fn new(ctx: &'a CheckContext) -> Self {
        Self { ctx }
    }

    /// Run every check in declared order, merging each check's entries
    /// into `collector`. `on_start` is called with each definition just
    /// before it runs.
    pub fn run_all<F>(
        &self,
        checks: &[CheckDefinition],
        collector: &mut ReportCollector,
        mut on_start: F,
    ) -> Vec<CheckOutcome>
    where
        F: FnMut(&CheckDefinition),
    {
        let mut outcomes = Vec::with_capacity(checks.len());

        for check in checks {
            on_start(check);

            // Each check gets an isolated collector so a fault cannot
            // interleave with entries from other checks.
            let mut local = ReportCollector::new();
            let passed = match (check.run)(self.ctx, &mut local) {
                Ok(passed) => passed,
                Err(e) => {
                    let fault = GantryError::CheckFailed {
                        check: check.name.to_string(),
                        message: e.to_string(),
                    };
                    local.issue(fault.to_string());
                    false
                }
            };

            tracing::debug!(
                check = check.name,
                passed,
                issues = local.issue_count(),
                warnings = local.warning_count(),
                "check finished"
            );

            collector.merge(local);
            outcomes.push(CheckOutcome {
                name: check.name,
                passed,
            });
        }

        outcomes
    }
}
