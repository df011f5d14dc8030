//! Credential and environment variable presence checks.
//!
//! Credential configuration is advisory at check time: every absence is a
//! warning and the check itself never fails. Presence only is verified,
//! never validity.

use crate::config::{EnvFileState, ENV_FILE_NAME};
use crate::error::Result;
use crate::report::ReportCollector;

use super::CheckContext;

/// Variables the agent cannot trade without, with their purpose.
pub const CRITICAL_VARS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "OpenAI API key"),
    ("OPENAI_API_BASE", "OpenAI base URL"),
];

/// Variables that unlock optional data sources.
pub const OPTIONAL_VARS: &[(&str, &str)] = &[
    ("ALPHAADVANTAGE_API_KEY", "Alpha Vantage API key"),
    ("JINA_API_KEY", "Jina AI API key"),
];

/// Credential check: report the `.env` state and the presence of each
/// declared variable. Always passes.
pub fn check_credentials(ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    match ctx.env.env_file() {
        EnvFileState::Missing => collector.warning(format!(
            "{} file not found (system environment variables will be used)",
            ENV_FILE_NAME
        )),
        EnvFileState::Loaded(defined) => collector.success(format!(
            "{} file found ({} variable(s))",
            ENV_FILE_NAME, defined
        )),
        EnvFileState::Malformed(detail) => collector.warning(format!(
            "{} file could not be parsed: {}",
            ENV_FILE_NAME, detail
        )),
    }

    for (var, purpose) in CRITICAL_VARS {
        if ctx.env.is_set(var) {
            collector.success(format!("{} ({}) is set", purpose, var));
        } else {
            collector.warning(format!("{} ({}) is not set", purpose, var));
        }
    }

    for (var, purpose) in OPTIONAL_VARS {
        if ctx.env.is_set(var) {
            collector.success(format!("{} ({}) is set", purpose, var));
        } else {
            collector.warning(format!("{} ({}) is not set (optional)", purpose, var));
        }
    }

    Ok(true)
}
