//! Capability registry and presence checks.
//!
//! The agent runtime depends on a fixed set of Python packages. Rather
//! than probing imports ad hoc, the required capabilities are declared in
//! a static table; each entry names its detection strategy and the package
//! name shown to the user.

use std::process::Command;

use crate::error::Result;
use crate::report::ReportCollector;

use super::runtime::RUNTIME_BINARY;
use super::CheckContext;

/// How a capability is detected on the host.
#[derive(Debug, Clone, Copy)]
pub enum CapabilityProbe {
    /// Resolvable as an import in the agent runtime's interpreter.
    ModuleImport(&'static str),
}

/// A declared capability of the agent runtime.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityDef {
    /// Package name as the user installs it.
    pub package: &'static str,
    /// Detection strategy.
    pub probe: CapabilityProbe,
}

/// Capabilities the agent runtime cannot start without.
pub const REQUIRED_CAPABILITIES: &[CapabilityDef] = &[
    CapabilityDef {
        package: "langchain",
        probe: CapabilityProbe::ModuleImport("langchain"),
    },
    CapabilityDef {
        package: "langchain-openai",
        probe: CapabilityProbe::ModuleImport("langchain_openai"),
    },
    CapabilityDef {
        package: "langchain-mcp-adapters",
        probe: CapabilityProbe::ModuleImport("langchain_mcp_adapters"),
    },
    CapabilityDef {
        package: "fastmcp",
        probe: CapabilityProbe::ModuleImport("fastmcp"),
    },
    CapabilityDef {
        package: "python-dotenv",
        probe: CapabilityProbe::ModuleImport("dotenv"),
    },
];

/// Resolve a capability against the real host.
fn resolve(probe: &CapabilityProbe) -> bool {
    match probe {
        CapabilityProbe::ModuleImport(module) => Command::new(RUNTIME_BINARY)
            .args(["-c", &format!("import {}", module)])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false),
    }
}

/// Evaluate the registry with a custom resolver.
///
/// This allows testing without touching the host interpreter.
pub fn check_capabilities_with<F>(collector: &mut ReportCollector, resolver: F) -> bool
where
    F: Fn(&CapabilityProbe) -> bool,
{
    let mut missing = 0usize;

    for cap in REQUIRED_CAPABILITIES {
        if resolver(&cap.probe) {
            collector.success(format!("{} - installed", cap.package));
        } else {
            missing += 1;
            collector.issue(format!("{} - not installed", cap.package));
        }
    }

    missing == 0
}

/// Capability check: every declared capability must resolve.
pub fn check_capabilities(_ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    Ok(check_capabilities_with(collector, resolve))
}
