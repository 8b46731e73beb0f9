//! Action contract
//!
//! An action is a named, stateless handler. The registry builds each action
//! once and shares it between every dispatch call, so implementations must
//! keep all per-call state local to [`Action::run`].
//!
//! ## Example
//!
//! ```
//! use pgapi_bridge::action::{decode_input, Action};
//! use pgapi_bridge::format::{PluginConfig, ResultMessage};
//! use serde::Deserialize;
//! use validator::Validate;
//!
//! #[derive(Deserialize, Validate)]
//! struct Params {
//!     #[validate(range(min = 1))]
//!     times: u32,
//! }
//!
//! struct Repeat;
//!
//! impl Action for Repeat {
//!     fn run(&self, input: &str, _config: &PluginConfig) -> ResultMessage {
//!         let params: Params = match decode_input(input) {
//!             Ok(p) => p,
//!             Err(e) => return ResultMessage::error(e.to_string()),
//!         };
//!         ResultMessage::success(vec![serde_json::json!("x".repeat(params.times as usize))])
//!     }
//! }
//! ```

mod decode;

pub use decode::{decode_input, encode_result, DecodeError};

use serde::{Deserialize, Serialize};

use crate::format::{PluginConfig, ResultMessage};

/// Message of the generic fallback result
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Describes a registered action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    /// Name the host passes as the first dispatch argument
    pub name: String,
    /// Human-readable description
    pub description: String,
}

impl ActionInfo {
    /// Create a new action info
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Capability every handler exposes to the bridge
pub trait Action: Send + Sync {
    /// Fallback result used when `run` cannot produce one, e.g. after a panic.
    ///
    /// # Default Implementation
    /// Empty data, [`UNKNOWN_ERROR`], `Error` state.
    fn default_result(&self) -> ResultMessage {
        ResultMessage::error(UNKNOWN_ERROR)
    }

    /// Execute against the raw input text and the parsed configuration.
    ///
    /// Anticipated failures (bad input, failed validation) must be returned
    /// as an `Error` result rather than panicking.
    fn run(&self, input: &str, config: &PluginConfig) -> ResultMessage;
}
