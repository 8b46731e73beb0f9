//! The envelope returned to the host

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResultState;

/// Envelope returned for every dispatch call.
///
/// Serializes as `{"data":[...],"message":"...","state":N}`. All three keys
/// are always present and `data` is always an array, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMessage {
    /// Action-defined result items
    #[serde(default)]
    pub data: Vec<Value>,
    /// Human-readable diagnostic, empty on success
    #[serde(default)]
    pub message: String,
    pub state: ResultState,
}

impl ResultMessage {
    /// Create a successful result carrying `data`
    pub fn success(data: Vec<Value>) -> Self {
        Self {
            data,
            message: String::new(),
            state: ResultState::Success,
        }
    }

    /// Create an error result with no data
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_state(ResultState::Error, message)
    }

    /// Create a warning result with no data
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_state(ResultState::Warning, message)
    }

    /// Create an informational result with no data
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_state(ResultState::Info, message)
    }

    fn with_state(state: ResultState, message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            message: message.into(),
            state,
        }
    }

    /// Serialize to the wire format
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a wire-format envelope
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_wire_format() {
        let msg = ResultMessage::success(vec![Value::String("Hello, World".to_string())]);
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"data":["Hello, World"],"message":"","state":0}"#
        );
    }

    #[test]
    fn test_error_keeps_empty_data_array() {
        let msg = ResultMessage::error("boom");
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"data":[],"message":"boom","state":-1}"#
        );
    }

    #[test]
    fn test_from_json_tolerates_missing_data() {
        let msg = ResultMessage::from_json(r#"{"state":1}"#).unwrap();
        assert_eq!(msg.state, ResultState::Info);
        assert!(msg.data.is_empty());
        assert!(msg.message.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_state() {
        assert!(ResultMessage::from_json(r#"{"data":[],"message":"","state":5}"#).is_err());
    }
}
