//! Check command implementation.
//!
//! The `gantry check` command runs every declared readiness check against
//! the project root and renders the report. This is also the default when
//! no subcommand is given.

use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, CheckRunner, BUILTIN_CHECKS};
use crate::config::EnvSnapshot;
use crate::error::Result;
use crate::report::{ReportCollector, Reporter};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Pre-flight readiness check");

        let env = EnvSnapshot::load(&self.project_root);
        let ctx = CheckContext::new(self.project_root.clone(), env);
        let mut collector = ReportCollector::new();

        let show_progress = ui.output_mode().shows_progress();
        let runner = CheckRunner::new(&ctx);
        let outcomes = runner.run_all(BUILTIN_CHECKS, &mut collector, |check| {
            if show_progress {
                ui.message(&format!("Checking {}...", check.name));
            }
        });

        for outcome in &outcomes {
            tracing::debug!(check = outcome.name, passed = outcome.passed, "outcome");
        }

        let ready = Reporter::render(&collector, ui);
        if ready {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
