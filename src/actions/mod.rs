//! Built-in actions
//!
//! The closed set of handlers compiled into the library. Adding an action
//! means adding a module here and an entry in [`builtin`].

mod hello;
mod meta;

pub use hello::{HelloAction, HelloParameter};
pub use meta::MetaAction;

use crate::action::{Action, ActionInfo};

/// Every built-in action with its registry metadata
pub fn builtin() -> Vec<(ActionInfo, Box<dyn Action>)> {
    vec![
        (
            ActionInfo::new("hello", "Greets the given name"),
            Box::new(HelloAction::new()),
        ),
        (
            ActionInfo::new("meta", "Returns name, description and version of this library"),
            Box::new(MetaAction),
        ),
    ]
}
