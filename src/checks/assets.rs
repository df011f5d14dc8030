//! Data asset presence checks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GantryError, Result};
use crate::report::ReportCollector;

use super::CheckContext;

/// Fixed data directory, relative to the project root.
pub const DATA_DIR: &str = "data";

/// Pattern for daily price data files inside the data directory.
pub const PRICE_FILE_PATTERN: &str = "daily_prices_*.json";

/// Subdirectory for per-agent run data; the agent creates it lazily.
pub const AGENT_DATA_SUBDIR: &str = "agent_data";

/// Single-`*` glob match on a file name.
fn matches_glob(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => name == pattern,
    }
}

/// Count direct children of `dir` whose file name matches `pattern`.
fn count_matching(dir: &Path, pattern: &str) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if matches_glob(name, pattern) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Data asset check: the data directory must exist; price files and the
/// agent data subdirectory are advisory.
pub fn check_data_assets(ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    let data_dir = ctx.path(DATA_DIR);
    if !data_dir.is_dir() {
        let fault = GantryError::MissingResource {
            path: PathBuf::from(DATA_DIR),
        };
        collector.issue(fault.to_string());
        return Ok(false);
    }

    let price_files = count_matching(&data_dir, PRICE_FILE_PATTERN)?;
    if price_files == 0 {
        collector.warning("No daily price data files found (run the price fetcher first)");
    } else {
        collector.success(format!("Found {} price data file(s)", price_files));
    }

    let agent_data = data_dir.join(AGENT_DATA_SUBDIR);
    if agent_data.is_dir() {
        collector.success(format!("{}/{} directory exists", DATA_DIR, AGENT_DATA_SUBDIR));
    } else {
        collector.warning(format!(
            "{}/{} directory missing (created automatically on first run)",
            DATA_DIR, AGENT_DATA_SUBDIR
        ));
    }

    Ok(true)
}
