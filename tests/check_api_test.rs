//! Integration tests for the check engine against on-disk fixtures.
//!
//! These tests drive the library API directly: filesystem-backed checks
//! run against tempdir fixtures, and the runner's orchestration contract
//! is exercised with custom check tables.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use gantry::checks::{
    assets, configuration, files, runner::CheckRunner, CheckContext, CheckDefinition,
    BUILTIN_CHECKS,
};
use gantry::config::EnvSnapshot;
use gantry::report::{ReadinessSummary, ReportCollector, Reporter};
use gantry::ui::MockUI;
use gantry::{GantryError, Result};
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"{
  "agent_type": "trading",
  "date_range": { "start": "2024-01-02", "end": "2024-06-28" },
  "models": [{ "name": "gpt-4o", "enabled": true }],
  "agent_config": { "max_steps": 20 }
}"#;

/// Filesystem-backed checks only; deterministic on any host.
const FS_CHECKS: &[CheckDefinition] = &[
    CheckDefinition {
        name: "configuration",
        run: configuration::check_configuration,
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
];

fn ctx_for(temp: &TempDir) -> CheckContext {
    CheckContext::new(
        temp.path().to_path_buf(),
        EnvSnapshot::from_vars(HashMap::new()),
    )
}

fn setup_fs_project(temp: &TempDir) {
    let root = temp.path();
    fs::create_dir_all(root.join("configs")).unwrap();
    fs::write(root.join("configs/default_config.json"), VALID_CONFIG).unwrap();

    for relative in files::AGENT_TOOL_FILES.iter().chain(files::MAIN_FILES) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fs::create_dir_all(root.join("data/agent_data")).unwrap();
    fs::write(root.join("data/daily_prices_AAPL.json"), "{}").unwrap();
}

#[test]
fn every_builtin_check_is_attempted_exactly_once() {
    let temp = TempDir::new().unwrap();
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    let outcomes = CheckRunner::new(&ctx).run_all(BUILTIN_CHECKS, &mut collector, |_| {});

    let attempted: Vec<&str> = outcomes.iter().map(|o| o.name).collect();
    let declared: Vec<&str> = BUILTIN_CHECKS.iter().map(|c| c.name).collect();
    assert_eq!(attempted, declared);
}

#[test]
fn complete_fixture_passes_all_filesystem_checks() {
    let temp = TempDir::new().unwrap();
    setup_fs_project(&temp);
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    let outcomes = CheckRunner::new(&ctx).run_all(FS_CHECKS, &mut collector, |_| {});

    assert!(outcomes.iter().all(|o| o.passed));
    assert!(collector.is_ready());
    assert_eq!(collector.issue_count(), 0);
}

#[test]
fn one_missing_file_flips_the_verdict() {
    let temp = TempDir::new().unwrap();
    setup_fs_project(&temp);
    fs::remove_file(temp.path().join("agent_tools/tool_trade.py")).unwrap();
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    let outcomes = CheckRunner::new(&ctx).run_all(FS_CHECKS, &mut collector, |_| {});

    // Only the agent tools check fails; the rest still run and pass.
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.passed)
        .map(|o| o.name)
        .collect();
    assert_eq!(failed, vec!["agent tools"]);
    assert!(!collector.is_ready());
    assert_eq!(collector.issue_count(), 1);
}

#[test]
fn runner_isolates_a_faulting_check() {
    fn faulting(_: &CheckContext, _: &mut ReportCollector) -> Result<bool> {
        Err(GantryError::MissingResource {
            path: PathBuf::from("exploded"),
        })
    }

    const WITH_FAULT: &[CheckDefinition] = &[
        CheckDefinition {
            name: "faulting",
            run: faulting,
        },
        CheckDefinition {
            name: "data assets",
            run: assets::check_data_assets,
        },
    ];

    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    let outcomes = CheckRunner::new(&ctx).run_all(WITH_FAULT, &mut collector, |_| {});

    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].passed);
    assert!(outcomes[1].passed);
    assert_eq!(collector.issue_count(), 1);
    assert!(collector.issues()[0].message.contains("faulting"));
}

#[test]
fn full_pipeline_renders_ready_with_warnings() {
    let temp = TempDir::new().unwrap();
    setup_fs_project(&temp);
    // Remove the price data so the data assets check warns.
    fs::remove_file(temp.path().join("data/daily_prices_AAPL.json")).unwrap();
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    CheckRunner::new(&ctx).run_all(FS_CHECKS, &mut collector, |_| {});

    let mut ui = MockUI::new();
    let ready = Reporter::render(&collector, &mut ui);

    assert!(ready);
    assert_eq!(
        ReadinessSummary::from_collector(&collector),
        ReadinessSummary::ReadyWithWarnings { warnings: 1 }
    );
    assert!(ui
        .warnings()
        .iter()
        .any(|m| m.contains("System is ready, with 1 warning(s)")));
}

#[test]
fn report_entries_follow_check_declaration_order() {
    let temp = TempDir::new().unwrap();
    setup_fs_project(&temp);
    let ctx = ctx_for(&temp);
    let mut collector = ReportCollector::new();

    CheckRunner::new(&ctx).run_all(FS_CHECKS, &mut collector, |_| {});

    // Configuration entries come before file entries because the checks
    // ran in declared order and merges preserve insertion order.
    let successes: Vec<&str> = collector
        .successes()
        .iter()
        .map(|e| e.message.as_str())
        .collect();
    let config_pos = successes
        .iter()
        .position(|m| m.contains("Configuration file valid"))
        .unwrap();
    let main_pos = successes
        .iter()
        .position(|m| m.contains("main.py - found"))
        .unwrap();
    assert!(config_pos < main_pos);
}
