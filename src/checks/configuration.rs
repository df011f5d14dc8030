//! Agent configuration file validity check.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GantryError, Result};
use crate::report::ReportCollector;

use super::CheckContext;

/// Fixed relative path of the agent configuration file.
pub const CONFIG_PATH: &str = "configs/default_config.json";

/// Top-level fields the configuration must define, in check order.
pub const REQUIRED_FIELDS: &[&str] = &["agent_type", "date_range", "models", "agent_config"];

/// A model entry as declared in the configuration's `models` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// First required field absent from the document, if any.
///
/// Deliberately short-circuits: the report names one missing field per
/// run, in declared order.
pub fn first_missing_field(doc: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| doc.get(field).is_none())
}

/// Count of model entries explicitly enabled in the document.
pub fn enabled_model_count(doc: &Value) -> usize {
    let Some(models) = doc.get("models") else {
        return 0;
    };
    let models: Vec<ModelEntry> = serde_json::from_value(models.clone()).unwrap_or_default();
    models.into_iter().filter(|m| m.enabled).count()
}

/// Configuration check: the file must exist, parse as JSON, and define
/// all required top-level fields. Zero enabled models is advisory only;
/// the file is still valid.
pub fn check_configuration(ctx: &CheckContext, collector: &mut ReportCollector) -> Result<bool> {
    let path = ctx.path(CONFIG_PATH);
    if !path.is_file() {
        let fault = GantryError::MissingResource {
            path: PathBuf::from(CONFIG_PATH),
        };
        collector.issue(fault.to_string());
        return Ok(false);
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            collector.issue(format!("Could not read {}: {}", CONFIG_PATH, e));
            return Ok(false);
        }
    };

    let doc: Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            let fault = GantryError::MalformedData {
                origin: CONFIG_PATH.to_string(),
                message: e.to_string(),
            };
            collector.issue(fault.to_string());
            return Ok(false);
        }
    };

    if let Some(field) = first_missing_field(&doc) {
        collector.issue(format!("Required configuration field missing: {}", field));
        return Ok(false);
    }

    let enabled = enabled_model_count(&doc);
    if enabled == 0 {
        collector.warning("No models are enabled in the configuration");
    } else {
        collector.success(format!("Found {} enabled model(s)", enabled));
    }

    collector.success(format!("Configuration file valid: {}", CONFIG_PATH));
    Ok(true)
}
