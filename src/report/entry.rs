//! Result classification types.
//!
//! Every check outcome is classified into tagged entries of one of three
//! severity tiers. Only [`Severity::Issue`] blocks readiness; warnings are
//! advisory and never affect the verdict.

/// Severity tier of a classified result entry.
///
/// The declared order (success, warning, issue) is the display order; no
/// numeric ranking affects any logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The checked condition holds.
    Success,
    /// Advisory finding.
    Warning,
    /// Blocking finding.
    Issue,
}

impl Severity {
    /// Whether entries of this tier block the readiness verdict.
    pub fn blocks_readiness(self) -> bool {
        matches!(self, Severity::Issue)
    }

    /// Lowercase label for log output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Issue => "issue",
        }
    }
}

/// A single classified finding produced by a check.
///
/// Immutable once created; insertion order within a severity bucket is
/// preserved through to the report.
#[derive(Debug, Clone)]
pub struct ResultEntry {
    /// Severity tier of the finding.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl ResultEntry {
    /// Create an entry with an explicit severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create a success entry.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Create a warning entry.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an issue entry.
    pub fn issue(message: impl Into<String>) -> Self {
        Self::new(Severity::Issue, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_issue_blocks_readiness() {
        assert!(!Severity::Success.blocks_readiness());
        assert!(!Severity::Warning.blocks_readiness());
        assert!(Severity::Issue.blocks_readiness());
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(Severity::Success.label(), "success");
        assert_eq!(Severity::Warning.label(), "warning");
        assert_eq!(Severity::Issue.label(), "issue");
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(ResultEntry::success("ok").severity, Severity::Success);
        assert_eq!(ResultEntry::warning("hm").severity, Severity::Warning);
        assert_eq!(ResultEntry::issue("bad").severity, Severity::Issue);
    }

    #[test]
    fn entry_keeps_message() {
        let entry = ResultEntry::warning("Search service not reachable on port 8001");
        assert!(entry.message.contains("port 8001"));
    }
}
