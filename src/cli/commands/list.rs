//! List command implementation.
//!
//! The `gantry list` command prints the declared checks in run order.

use crate::checks::BUILTIN_CHECKS;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
#[derive(Default)]
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Declared checks");
        for (idx, check) in BUILTIN_CHECKS.iter().enumerate() {
            ui.message(&format!("  {}. {}", idx + 1, check.name));
        }
        Ok(CommandResult::success())
    }
}
