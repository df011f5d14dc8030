//! Gantry - pre-flight readiness checks for a multi-service trading agent
//! runtime.
//!
//! Gantry verifies that the host environment, configuration, credentials,
//! data assets, tool files, and companion services are in an acceptable
//! state before the agent is allowed to run. Checks execute in a fixed
//! declared order with fault isolation; every finding is classified as a
//! success, warning, or issue, and only issues block the readiness
//! verdict.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`checks`] - The check table, the runner, and the individual probes
//! - [`config`] - Environment snapshot and `.env` parsing
//! - [`error`] - Error types and result alias
//! - [`report`] - Result classification, aggregation, and rendering
//! - [`ui`] - Terminal output and the mockable UI abstraction
//!
//! # Example
//!
//! ```
//! use gantry::report::ReportCollector;
//!
//! let mut collector = ReportCollector::new();
//! collector.warning("Search service not reachable on port 8001");
//!
//! // Warnings never block readiness; only issues do.
//! assert!(collector.is_ready());
//! collector.issue("main.py - missing");
//! assert!(!collector.is_ready());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{GantryError, Result};
