//! Decode/validate pipeline shared by all actions
//!
//! Every action's `run` follows the same three steps: decode the input into
//! its parameter type, execute, encode the items. The first and last steps
//! live here.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::format::ResultMessage;

/// Errors raised while turning raw input text into action parameters
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input is not valid JSON or does not match the parameter shape
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Input decoded but broke a declared constraint
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Decode `raw` into `T` and check its declared constraints.
///
/// Types without any `#[validate(...)]` rules always pass validation.
pub fn decode_input<T>(raw: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Validate,
{
    let target: T = serde_json::from_str(raw)?;
    target.validate()?;
    Ok(target)
}

/// Wrap result items in a success envelope.
///
/// An empty item list means the action produced nothing; `default` is
/// returned instead.
pub fn encode_result(items: Vec<Value>, default: ResultMessage) -> ResultMessage {
    if items.is_empty() {
        return default;
    }
    ResultMessage::success(items)
}
