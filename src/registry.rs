//! Action registry
//!
//! Name to action table. The table is filled once at construction and has
//! no mutating methods afterwards, so concurrent dispatch calls can read it
//! without locking.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::warn;

use crate::action::{Action, ActionInfo};
use crate::actions;

static GLOBAL: LazyLock<ActionRegistry> =
    LazyLock::new(|| ActionRegistry::new(actions::builtin()));

/// The process-wide registry holding the built-in actions
pub fn global() -> &'static ActionRegistry {
    &GLOBAL
}

struct Entry {
    info: ActionInfo,
    action: Box<dyn Action>,
}

/// Immutable name to action table
pub struct ActionRegistry {
    entries: BTreeMap<String, Entry>,
}

impl ActionRegistry {
    /// Build a registry from a fixed set of actions.
    ///
    /// Names are matched exactly and case-sensitively. If a name appears
    /// twice the first registration is kept.
    pub fn new(actions: Vec<(ActionInfo, Box<dyn Action>)>) -> Self {
        let mut entries = BTreeMap::new();
        for (info, action) in actions {
            if entries.contains_key(&info.name) {
                warn!(action = %info.name, "Duplicate action name, keeping first registration");
                continue;
            }
            entries.insert(info.name.clone(), Entry { info, action });
        }
        Self { entries }
    }

    /// Find the action registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&dyn Action> {
        self.entries.get(name).map(|e| e.action.as_ref())
    }

    /// Whether an action is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Registered action metadata in sorted name order
    pub fn infos(&self) -> Vec<&ActionInfo> {
        self.entries.values().map(|e| &e.info).collect()
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no action is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.names())
            .finish()
    }
}
