//! Wire vocabulary shared by the bridge and every action
//!
//! - [`ResultState`]: stable integer outcome codes
//! - [`ResultMessage`]: the `{data, message, state}` envelope returned to the host
//! - [`PluginConfig`]: the per-call configuration object

mod plugin_config;
mod result_message;
mod state;

pub use plugin_config::PluginConfig;
pub use result_message::ResultMessage;
pub use state::{ResultState, UnknownStateCode};
