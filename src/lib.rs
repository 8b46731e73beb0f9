//! # pgapi bridge
//!
//! A named-action dispatch bridge for database extensions. The host loads
//! this crate as a shared library and calls one C function with three text
//! arguments; the bridge routes the call to a named action and returns one
//! JSON envelope.
//!
//! ## Features
//!
//! - **Single entry point** - `pgapi_dispatch(name, input, config)` plus `pgapi_free`
//! - **Immutable registry** - actions are registered once and shared lock-free
//! - **Decode/validate pipeline** - serde + `validator` rules for action input
//! - **Failure containment** - panics never cross the FFI boundary
//!
//! ## Wire format
//!
//! Every call returns `{"data":[...],"message":"...","state":N}` where `state`
//! is `0` success, `-1` error, `-2` warning or `1` info.
//!
//! ## Quick Start
//!
//! ```rust
//! use pgapi_bridge::{bridge, registry};
//!
//! let out = bridge::handle(registry::global(), "hello", r#"{"name":"World"}"#, "{}");
//! assert_eq!(out, r#"{"data":["Hello, World"],"message":"","state":0}"#);
//!
//! let out = bridge::handle(registry::global(), "missing", "{}", "{}");
//! assert_eq!(out, r#"{"data":[],"message":"action missing not found","state":-1}"#);
//! ```
//!
//! ## Host glue (PostgreSQL)
//!
//! ```c
//! char *name  = text_to_cstring(PG_GETARG_TEXT_PP(0));
//! char *input = text_to_cstring(PG_GETARG_TEXT_PP(1));
//! char *cfg   = text_to_cstring(PG_GETARG_TEXT_PP(2));
//! char *res   = pgapi_dispatch(name, input, cfg);
//! text *out   = cstring_to_text(res);
//! pgapi_free(res);
//! PG_RETURN_TEXT_P(out);
//! ```

pub mod action;
pub mod actions;
pub mod bridge;
pub mod cases;
pub mod format;
pub mod logging;
pub mod meta;
pub mod registry;

// Re-export main types
pub use action::{decode_input, encode_result, Action, ActionInfo, DecodeError};
pub use bridge::ffi::{pgapi_dispatch, pgapi_free};
pub use bridge::{dispatch, handle, DispatchError};
pub use cases::{Case, CaseFile, CaseOutcome, LoadError};
pub use format::{PluginConfig, ResultMessage, ResultState};
pub use registry::ActionRegistry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{decode_input, encode_result, Action, ActionInfo, DecodeError};
    pub use crate::format::{PluginConfig, ResultMessage, ResultState};
    pub use crate::registry::ActionRegistry;
}
