//! `hello` action

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::action::{decode_input, encode_result, Action};
use crate::format::{PluginConfig, ResultMessage};

/// Input of the `hello` action: `{"name": "World"}`
#[derive(Debug, Deserialize, Validate)]
pub struct HelloParameter {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Default)]
pub struct HelloAction;

impl HelloAction {
    pub fn new() -> Self {
        Self
    }
}

impl Action for HelloAction {
    fn run(&self, input: &str, _config: &PluginConfig) -> ResultMessage {
        let parameter: HelloParameter = match decode_input(input) {
            Ok(p) => p,
            Err(e) => return ResultMessage::error(e.to_string()),
        };

        let greeting = Value::String(format!("Hello, {}", parameter.name));
        encode_result(vec![greeting], self.default_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ResultState;

    fn run(input: &str) -> ResultMessage {
        HelloAction::new().run(input, &PluginConfig::new())
    }

    #[test]
    fn test_hello_world() {
        let result = run(r#"{"name":"World"}"#);
        assert_eq!(result.state, ResultState::Success);
        assert_eq!(result.data, vec![Value::String("Hello, World".to_string())]);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_hello_ignores_extra_fields() {
        let result = run(r#"{"name":"Ada","extra":true}"#);
        assert_eq!(result.data, vec![Value::String("Hello, Ada".to_string())]);
    }

    #[test]
    fn test_hello_invalid_json() {
        let result = run("not-json");
        assert_eq!(result.state, ResultState::Error);
        assert!(!result.message.is_empty());
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_hello_empty_name_fails_validation() {
        let result = run(r#"{"name":""}"#);
        assert_eq!(result.state, ResultState::Error);
        assert!(result.message.contains("name"));
    }
}
