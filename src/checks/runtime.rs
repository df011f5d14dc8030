//! Runtime interpreter version check.
//!
//! The agent runtime is executed with CPython, so readiness requires an
//! interpreter of at least the minimum supported version on the PATH.

use std::fmt;
use std::process::Command;

use regex::Regex;

use crate::error::{GantryError, Result};
use crate::report::ReportCollector;

use super::CheckContext;

/// Interpreter binary the agent runtime is executed with.
pub const RUNTIME_BINARY: &str = "python3";

/// Minimum interpreter version the agent runtime supports.
pub const MIN_RUNTIME_VERSION: RuntimeVersion = RuntimeVersion {
    major: 3,
    minor: 10,
    patch: None,
};

/// A parsed interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl RuntimeVersion {
    /// Whether this version satisfies `min`.
    ///
    /// The comparison is lexicographic on (major, minor): a newer major
    /// version passes regardless of its minor component.
    pub fn meets_minimum(&self, min: &RuntimeVersion) -> bool {
        (self.major, self.minor) >= (min.major, min.minor)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Extract a version number from `python3 --version` style output.
pub fn parse_version_output(output: &str) -> Result<RuntimeVersion> {
    let pattern = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid");
    let caps = pattern
        .captures(output)
        .ok_or_else(|| GantryError::MalformedData {
            origin: format!("{} version output", RUNTIME_BINARY),
            message: format!("no version number in {:?}", output.trim()),
        })?;

    let component = |idx: usize| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    Ok(RuntimeVersion {
        major: component(1).unwrap_or(0),
        minor: component(2).unwrap_or(0),
        patch: component(3),
    })
}

/// Detect the interpreter version by running `python3 --version`.
///
/// Older interpreters print the version banner to stderr, so both streams
/// are consulted.
pub fn detect_runtime_version() -> Result<RuntimeVersion> {
    let output = Command::new(RUNTIME_BINARY)
        .arg("--version")
        .output()
        .map_err(|e| GantryError::UnresolvedDependency {
            name: RUNTIME_BINARY.to_string(),
            message: e.to_string(),
        })?;

    let mut banner = String::from_utf8_lossy(&output.stdout).into_owned();
    banner.push_str(&String::from_utf8_lossy(&output.stderr));
    parse_version_output(&banner)
}

/// Classify a detected version against the minimum.
pub(crate) fn classify_version(version: &RuntimeVersion, collector: &mut ReportCollector) -> bool {
    if version.meets_minimum(&MIN_RUNTIME_VERSION) {
        collector.success(format!("Python {} - OK", version));
        true
    } else {
        let fault = GantryError::VersionBelowMinimum {
            found: version.to_string(),
            required: MIN_RUNTIME_VERSION.to_string(),
        };
        collector.issue(fault.to_string());
        false
    }
}

/// Runtime version check: the interpreter must exist on the PATH and be at
/// least the minimum supported version.
pub fn check_runtime_version(_ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    match detect_runtime_version() {
        Ok(version) => Ok(classify_version(&version, collector)),
        Err(e) => {
            collector.issue(format!("Python runtime not available: {}", e));
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(major: u32, minor: u32) -> RuntimeVersion {
        RuntimeVersion {
            major,
            minor,
            patch: None,
        }
    }

    #[test]
    fn parses_standard_banner() {
        let v = parse_version_output("Python 3.11.4\n").unwrap();
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, 11);
        assert_eq!(v.patch, Some(4));
    }

    #[test]
    fn parses_banner_without_patch() {
        let v = parse_version_output("Python 3.12").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 12, None));
    }

    #[test]
    fn rejects_output_without_a_version() {
        let err = parse_version_output("command not found").unwrap_err();
        assert!(err.to_string().contains("version output"));
    }

    #[test]
    fn minor_below_threshold_fails() {
        assert!(!version(3, 9).meets_minimum(&MIN_RUNTIME_VERSION));
    }

    #[test]
    fn exact_threshold_passes() {
        assert!(version(3, 10).meets_minimum(&MIN_RUNTIME_VERSION));
    }

    #[test]
    fn later_minor_passes() {
        assert!(version(3, 15).meets_minimum(&MIN_RUNTIME_VERSION));
    }

    #[test]
    fn next_major_with_lower_minor_passes() {
        // Lexicographic comparison: 4.0 is newer than 3.10.
        assert!(version(4, 0).meets_minimum(&MIN_RUNTIME_VERSION));
    }

    #[test]
    fn much_older_major_fails() {
        assert!(!version(2, 7).meets_minimum(&MIN_RUNTIME_VERSION));
    }

    #[test]
    fn classify_records_success_for_new_enough_version() {
        let mut collector = ReportCollector::new();
        let passed = classify_version(
            &RuntimeVersion {
                major: 3,
                minor: 12,
                patch: Some(1),
            },
            &mut collector,
        );

        assert!(passed);
        assert_eq!(collector.success_count(), 1);
        assert!(collector.successes()[0].message.contains("3.12.1"));
    }

    #[test]
    fn classify_records_issue_for_old_version() {
        let mut collector = ReportCollector::new();
        let passed = classify_version(&version(3, 9), &mut collector);

        assert!(!passed);
        assert_eq!(collector.issue_count(), 1);
        let msg = &collector.issues()[0].message;
        assert!(msg.contains("3.9"));
        assert!(msg.contains("3.10"));
    }

    #[test]
    fn display_includes_patch_when_known() {
        let v = RuntimeVersion {
            major: 3,
            minor: 10,
            patch: Some(12),
        };
        assert_eq!(v.to_string(), "3.10.12");
        assert_eq!(MIN_RUNTIME_VERSION.to_string(), "3.10");
    }
}
