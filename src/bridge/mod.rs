//! Dispatch bridge
//!
//! Turns one `(name, input, config)` text triple into one serialized
//! [`ResultMessage`]. Every path ends in a parseable envelope:
//!
//! ```text
//! config text --parse--> PluginConfig ----lookup----> Action --run--> ResultMessage --serialize--> text
//!       |                                   |                |                          |
//!       +-- invalid: Error envelope         +-- missing:     +-- panic: action's        +-- failure: fixed
//!                                               Error            default_result()           fallback literal
//! ```
//!
//! Any other panic along the way yields [`INTERNAL_FALLBACK`].
//!
//! [`handle`] is the safe Rust entry point. The C ABI in [`ffi`] wraps it
//! with pointer handling and buffer ownership.

pub mod ffi;
pub mod guard;

use tracing::{debug, error, instrument, warn};

use crate::action::Action;
use crate::format::{PluginConfig, ResultMessage};
use crate::registry::ActionRegistry;

pub use guard::{contain, ContainedPanic};

/// Returned when a result cannot be serialized
pub const SERIALIZATION_FALLBACK: &str =
    r#"{"data":[],"message":"result serialization failed","state":-1}"#;

/// Returned when the bridge itself panics outside of an action
pub const INTERNAL_FALLBACK: &str = r#"{"data":[],"message":"internal bridge failure","state":-1}"#;

/// Failures the bridge reports before an action runs
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid plugin config cannot parse {raw}: {source}")]
    ConfigParse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("action {0} not found")]
    ActionNotFound(String),
}

impl From<DispatchError> for ResultMessage {
    fn from(err: DispatchError) -> Self {
        ResultMessage::error(err.to_string())
    }
}

/// Dispatch one call and return the serialized envelope.
///
/// Never panics: a panic outside of `Action::run` (for example in an
/// action's `default_result`) yields [`INTERNAL_FALLBACK`].
pub fn handle(registry: &ActionRegistry, name: &str, input: &str, config: &str) -> String {
    match contain(|| serialize(&dispatch(registry, name, input, config))) {
        Ok(text) => text,
        Err(panic) => {
            error!(
                action = name,
                panic = %panic.message,
                backtrace = %panic.backtrace,
                "Bridge panicked outside of an action"
            );
            INTERNAL_FALLBACK.to_string()
        }
    }
}

/// Dispatch one call and return the envelope before serialization.
#[instrument(level = "debug", skip(registry, input, config))]
pub fn dispatch(registry: &ActionRegistry, name: &str, input: &str, config: &str) -> ResultMessage {
    let result = match prepare(registry, name, config) {
        Ok((action, config)) => execute(name, action, input, &config),
        Err(e) => {
            warn!(action = name, error = %e, "Dispatch rejected");
            e.into()
        }
    };
    debug!(action = name, state = %result.state, "Dispatch complete");
    result
}

fn prepare<'r>(
    registry: &'r ActionRegistry,
    name: &str,
    config: &str,
) -> Result<(&'r dyn Action, PluginConfig), DispatchError> {
    let config = PluginConfig::parse(config).map_err(|source| DispatchError::ConfigParse {
        raw: config.to_string(),
        source,
    })?;
    let action = registry
        .lookup(name)
        .ok_or_else(|| DispatchError::ActionNotFound(name.to_string()))?;
    Ok((action, config))
}

fn execute(name: &str, action: &dyn Action, input: &str, config: &PluginConfig) -> ResultMessage {
    match contain(|| action.run(input, config)) {
        Ok(result) => result,
        Err(panic) => {
            error!(
                action = name,
                panic = %panic.message,
                backtrace = %panic.backtrace,
                "Action panicked, returning its default result"
            );
            action.default_result()
        }
    }
}

fn serialize(result: &ResultMessage) -> String {
    match result.to_json() {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Failed to serialize result");
            SERIALIZATION_FALLBACK.to_string()
        }
    }
}
