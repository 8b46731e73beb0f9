#![allow(dead_code)]

use std::ffi::{CStr, CString};
use std::fs;
use std::path::{Path, PathBuf};

use pgapi_bridge::prelude::*;
use pgapi_bridge::{pgapi_dispatch, pgapi_free};
use serde::Deserialize;
use serde_json::Value;
use tempfile::TempDir;
use validator::Validate;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_case_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("Failed to write case file");
    path
}

/// Call the exported C entry point and copy the result out
pub fn ffi_dispatch(name: &str, input: &str, config: &str) -> String {
    let name = CString::new(name).unwrap();
    let input = CString::new(input).unwrap();
    let config = CString::new(config).unwrap();

    let result = unsafe { pgapi_dispatch(name.as_ptr(), input.as_ptr(), config.as_ptr()) };
    assert!(!result.is_null(), "dispatch returned null");

    let text = unsafe { CStr::from_ptr(result) }
        .to_str()
        .expect("result is not UTF-8")
        .to_string();
    unsafe { pgapi_free(result) };
    text
}

pub fn parse(output: &str) -> ResultMessage {
    ResultMessage::from_json(output).expect("output is not a valid ResultMessage")
}

#[derive(Debug, Deserialize, Validate)]
pub struct SumParameter {
    #[validate(length(min = 1, message = "at least one number is required"))]
    pub numbers: Vec<i64>,
}

/// Adds up `{"numbers": [...]}`
pub struct SumAction;

impl Action for SumAction {
    fn run(&self, input: &str, _config: &PluginConfig) -> ResultMessage {
        let parameter: SumParameter = match decode_input(input) {
            Ok(p) => p,
            Err(e) => return ResultMessage::error(e.to_string()),
        };
        let total: i64 = parameter.numbers.iter().sum();
        encode_result(vec![Value::from(total)], self.default_result())
    }
}

/// Panics on every call, the way a bug in an action would
pub struct ExplodingAction;

impl Action for ExplodingAction {
    fn default_result(&self) -> ResultMessage {
        ResultMessage::error("exploding action failed")
    }

    fn run(&self, input: &str, _config: &PluginConfig) -> ResultMessage {
        let values: Vec<i64> = Vec::new();
        // out-of-bounds index panics
        ResultMessage::success(vec![Value::from(values[input.len()])])
    }
}

/// Returns an `Info` result with nothing in it
pub struct EmptyAction;

impl Action for EmptyAction {
    fn default_result(&self) -> ResultMessage {
        ResultMessage::info("nothing to report")
    }

    fn run(&self, _input: &str, _config: &PluginConfig) -> ResultMessage {
        encode_result(vec![], self.default_result())
    }
}

/// Panics in `run` and again in `default_result`
pub struct BrokenDefaultAction;

impl Action for BrokenDefaultAction {
    fn default_result(&self) -> ResultMessage {
        panic!("fallback construction failed")
    }

    fn run(&self, _input: &str, _config: &PluginConfig) -> ResultMessage {
        panic!("run failed")
    }
}

pub fn test_registry() -> ActionRegistry {
    ActionRegistry::new(vec![
        (ActionInfo::new("sum", "Adds numbers"), Box::new(SumAction)),
        (ActionInfo::new("explode", "Always panics"), Box::new(ExplodingAction)),
        (ActionInfo::new("empty", "Returns nothing"), Box::new(EmptyAction)),
        (ActionInfo::new("broken", "Panics everywhere"), Box::new(BrokenDefaultAction)),
    ])
}
