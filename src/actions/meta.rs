//! `meta` action

use serde_json::json;

use crate::action::{encode_result, Action};
use crate::format::{PluginConfig, ResultMessage};
use crate::meta::{APP_NAME, DESCRIPTION, VERSION};

/// Reports which library build the host has loaded. Input is ignored.
#[derive(Debug, Default)]
pub struct MetaAction;

impl Action for MetaAction {
    fn run(&self, _input: &str, _config: &PluginConfig) -> ResultMessage {
        let item = json!({
            "name": APP_NAME,
            "description": DESCRIPTION,
            "version": VERSION,
        });
        encode_result(vec![item], self.default_result())
    }
}
