//! Readiness checks and their orchestration.
//!
//! Each check is an independent probe with signature
//! `fn(&CheckContext, &mut ReportCollector) -> Result<bool>`. A check
//! appends classified entries to the collector as it inspects the host;
//! the returned boolean is its own pass/fail signal, kept for bookkeeping
//! only. The entries drive the readiness verdict, not the booleans.
//!
//! The full set of checks is the statically declared, ordered
//! [`BUILTIN_CHECKS`] table; nothing is discovered at runtime.

pub mod assets;
pub mod capabilities;
pub mod configuration;
pub mod credentials;
pub mod files;
pub mod runner;
pub mod runtime;
pub mod services;

use std::path::PathBuf;

use crate::config::EnvSnapshot;
use crate::error::Result;
use crate::report::ReportCollector;

pub use runner::{CheckOutcome, CheckRunner};

/// Shared, read-only context handed to every check.
#[derive(Debug)]
pub struct CheckContext {
    /// Root of the project under check; fixed relative paths resolve here.
    pub project_root: PathBuf,
    /// Environment snapshot (process env over `.env`).
    pub env: EnvSnapshot,
}

impl CheckContext {
    /// Create a context for a project root.
    pub fn new(project_root: PathBuf, env: EnvSnapshot) -> Self {
        Self { project_root, env }
    }

    /// Resolve a path relative to the project root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }
}

/// Signature every check action conforms to.
pub type CheckFn = fn(&CheckContext, &mut ReportCollector) -> Result<bool>;

/// A single declared check.
#[derive(Debug, Clone, Copy)]
pub struct CheckDefinition {
    /// Human-readable name, also used in fault messages.
    pub name: &'static str,
    /// The probe action.
    pub run: CheckFn,
}

/// All built-in checks, in declared run order.
pub const BUILTIN_CHECKS: &[CheckDefinition] = &[
    CheckDefinition {
        name: "runtime version",
        run: runtime::check_runtime_version,
    },
    CheckDefinition {
        name: "capabilities",
        run: capabilities::check_capabilities,
    },
    CheckDefinition {
        name: "configuration",
        run: configuration::check_configuration,
    },
    CheckDefinition {
        name: "credentials",
        run: credentials::check_credentials,
    },
    CheckDefinition {
        name: "data assets",
        run: assets::check_data_assets,
    },
    CheckDefinition {
        name: "agent tools",
        run: files::check_agent_tools,
    },
    CheckDefinition {
        name: "main files",
        run: files::check_main_files,
    },
    CheckDefinition {
        name: "companion services",
        run: services::check_companion_services,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn builtin_checks_are_declared_in_fixed_order() {
        let names: Vec<&str> = BUILTIN_CHECKS.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "runtime version",
                "capabilities",
                "configuration",
                "credentials",
                "data assets",
                "agent tools",
                "main files",
                "companion services",
            ]
        );
    }

    #[test]
    fn context_resolves_relative_paths() {
        let ctx = CheckContext::new(
            PathBuf::from("/srv/trader"),
            EnvSnapshot::from_vars(HashMap::new()),
        );
        assert_eq!(ctx.path("data"), PathBuf::from("/srv/trader/data"));
    }
}
