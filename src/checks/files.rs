//! Required local file presence checks.
//!
//! Two fixed path lists: the agent's tool scripts and the runtime's entry
//! points. Every path produces its own entry; a single absent file fails
//! the owning check.

use crate::error::Result;
use crate::report::ReportCollector;

use super::CheckContext;

/// Tool scripts the agent dispatches to at runtime.
pub const AGENT_TOOL_FILES: &[&str] = &[
    "agent_tools/tool_math.py",
    "agent_tools/tool_jina_search.py",
    "agent_tools/tool_trade.py",
    "agent_tools/tool_get_price_local.py",
    "agent_tools/start_mcp_services.py",
];

/// Entry points and manifests the runtime is started from.
pub const MAIN_FILES: &[&str] = &[
    "main.py",
    "requirements.txt",
    "agent/base_agent/base_agent.py",
];

/// One entry per path; passes only when every path exists.
fn check_path_list(
    ctx: &CheckContext,
    collector: &mut ReportCollector,
    paths: &[&str],
) -> bool {
    let mut all_present = true;
    for relative in paths {
        if ctx.path(relative).exists() {
            collector.success(format!("{} - found", relative));
        } else {
            all_present = false;
            collector.issue(format!("{} - missing", relative));
        }
    }
    all_present
}

/// Agent tool file check.
pub fn check_agent_tools(ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    Ok(check_path_list(ctx, collector, AGENT_TOOL_FILES))
}

/// Main file check.
pub fn check_main_files(ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    Ok(check_path_list(ctx, collector, MAIN_FILES))
}
