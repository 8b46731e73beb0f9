//! Dispatch case files
//!
//! A case file lists dispatch calls and what each should return. The `pgapi`
//! binary runs them against the built-in registry as a smoke test without a
//! database host:
//!
//! ```yaml
//! cases:
//!   - name: greets
//!     action: hello
//!     input:
//!       name: World
//!     expect_state: 0
//!     expect_data: ["Hello, World"]
//!
//!   - action: hello
//!     input: "not-json"
//!     expect_state: -1
//! ```
//!
//! `input` and `config` are written as YAML and re-encoded as JSON text; a
//! YAML string is passed through unchanged so malformed payloads can be
//! tested. Both default to `{}`.

use std::path::Path;

use serde::Deserialize;

use crate::bridge;
use crate::format::{ResultMessage, ResultState};
use crate::registry::ActionRegistry;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },
}

/// A list of dispatch cases
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// One dispatch call and its expectations
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: Option<String>,
    pub action: String,
    #[serde(default)]
    pub input: Option<serde_yaml::Value>,
    #[serde(default)]
    pub config: Option<serde_yaml::Value>,
    #[serde(default)]
    pub expect_state: Option<ResultState>,
    #[serde(default)]
    pub expect_data: Option<Vec<serde_json::Value>>,
}

/// What happened when a case was dispatched
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub label: String,
    /// Raw text returned by the bridge
    pub output: String,
    /// Expectation mismatches; empty means the case passed
    pub failures: Vec<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl CaseFile {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| LoadError::Yaml {
            file: path.display().to_string(),
            error: e,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(content).map_err(|e| LoadError::Yaml {
            file: "<inline>".to_string(),
            error: e,
        })
    }

    /// Dispatch every case in order
    pub fn run(&self, registry: &ActionRegistry) -> Vec<CaseOutcome> {
        self.cases
            .iter()
            .enumerate()
            .map(|(i, case)| case.run(i, registry))
            .collect()
    }
}

impl Case {
    /// Display label, falling back to position and action name
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{} {}", index + 1, self.action),
        }
    }

    pub fn input_text(&self) -> Result<String, serde_json::Error> {
        to_json_text(self.input.as_ref())
    }

    pub fn config_text(&self) -> Result<String, serde_json::Error> {
        to_json_text(self.config.as_ref())
    }

    fn run(&self, index: usize, registry: &ActionRegistry) -> CaseOutcome {
        let label = self.label(index);
        let (input, config) = match (self.input_text(), self.config_text()) {
            (Ok(input), Ok(config)) => (input, config),
            (Err(e), _) | (_, Err(e)) => {
                return CaseOutcome {
                    label,
                    output: String::new(),
                    failures: vec![format!("cannot encode case as JSON: {}", e)],
                }
            }
        };

        let output = bridge::handle(registry, &self.action, &input, &config);
        let failures = match ResultMessage::from_json(&output) {
            Ok(result) => self.check(&result),
            Err(e) => vec![format!("bridge returned unparseable output: {}", e)],
        };

        CaseOutcome {
            label,
            output,
            failures,
        }
    }

    /// Compare a result against this case's expectations
    pub fn check(&self, result: &ResultMessage) -> Vec<String> {
        let mut failures = Vec::new();
        if let Some(expected) = self.expect_state {
            if result.state != expected {
                failures.push(format!(
                    "expected state {} ({}), got {} ({})",
                    expected.code(),
                    expected,
                    result.state.code(),
                    result.state
                ));
            }
        }
        if let Some(expected) = &self.expect_data {
            if &result.data != expected {
                failures.push(format!(
                    "expected data {}, got {}",
                    serde_json::Value::Array(expected.clone()),
                    serde_json::Value::Array(result.data.clone())
                ));
            }
        }
        failures
    }
}

fn to_json_text(value: Option<&serde_yaml::Value>) -> Result<String, serde_json::Error> {
    match value {
        None => Ok("{}".to_string()),
        Some(serde_yaml::Value::String(s)) => Ok(s.clone()),
        Some(other) => serde_json::to_string(other),
    }
}
