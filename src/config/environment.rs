//! Environment variable handling.
//!
//! Readiness checks consult a single [`EnvSnapshot`] assembled once per
//! run: the optional `.env` file at the project root, overlaid with the
//! process environment. Process values win, matching the convention of
//! dotenv loaders.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::Path;

/// Name of the optional environment definition file at the project root.
pub const ENV_FILE_NAME: &str = ".env";

/// What was found when loading the `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileState {
    /// No `.env` at the project root.
    Missing,
    /// Parsed successfully; holds the number of variables defined.
    Loaded(usize),
    /// Present but unreadable or unparseable; holds the error text.
    Malformed(String),
}

/// Snapshot of the environment visible to a readiness run.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    env_file: EnvFileState,
}

impl EnvSnapshot {
    /// Load the snapshot for a project root from the real process
    /// environment and the root's `.env` file.
    pub fn load(project_root: &Path) -> Self {
        Self::load_with(project_root, std::env::vars().collect())
    }

    /// Load with an explicit process-environment map.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn load_with(project_root: &Path, process_env: HashMap<String, String>) -> Self {
        let env_path = project_root.join(ENV_FILE_NAME);
        let (mut vars, env_file) = if env_path.is_file() {
            match std::fs::read_to_string(&env_path) {
                Ok(content) => match parse_dotenv(&content) {
                    Ok(file_vars) => {
                        let defined = file_vars.len();
                        (file_vars, EnvFileState::Loaded(defined))
                    }
                    Err(e) => (HashMap::new(), EnvFileState::Malformed(e.to_string())),
                },
                Err(e) => (HashMap::new(), EnvFileState::Malformed(e.to_string())),
            }
        } else {
            (HashMap::new(), EnvFileState::Missing)
        };

        // Process environment wins over file-defined values.
        vars.extend(process_env);

        Self { vars, env_file }
    }

    /// Build a snapshot from explicit variables with no `.env` file.
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            env_file: EnvFileState::Missing,
        }
    }

    /// State of the `.env` file at load time.
    pub fn env_file(&self) -> &EnvFileState {
        &self.env_file
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is present with a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Resolve a TCP port from a variable, falling back to `default` when
    /// the variable is unset or not a valid port number.
    pub fn port(&self, key: &str, default: u16) -> u16 {
        match self.get(key) {
            None => default,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::debug!(var = key, value = raw, "port variable not numeric, using default");
                default
            }),
        }
    }
}

/// Parse `.env` content in `KEY=value` format.
///
/// Supports quoted values, comments, blank lines, and values containing
/// `=`. A non-comment line without `=` is a parse error.
///
/// # Example
///
/// ```
/// use gantry::config::parse_dotenv;
///
/// let content = "# credentials\nOPENAI_API_KEY=sk-test\nOPENAI_API_BASE=\"https://api.example.com/v1\"\n";
/// let vars = parse_dotenv(content).unwrap();
/// assert_eq!(vars.get("OPENAI_API_KEY").map(String::as_str), Some("sk-test"));
/// assert_eq!(
///     vars.get("OPENAI_API_BASE").map(String::as_str),
///     Some("https://api.example.com/v1")
/// );
/// ```
pub fn parse_dotenv(content: &str) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(eq) = line.find('=') else {
            bail!("invalid line {}: {}", idx + 1, raw_line);
        };
        let key = line[..eq].trim();
        if key.is_empty() {
            bail!("invalid line {}: {}", idx + 1, raw_line);
        }

        let value = unquote(line[eq + 1..].trim());
        vars.insert(key.to_string(), value.to_string());
    }

    Ok(vars)
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
