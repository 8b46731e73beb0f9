//! Result state codes

use serde::{Deserialize, Serialize};

/// Outcome class of a dispatched action.
///
/// The integer codes are part of the wire format. SQL written against the
/// host may compare them directly, so they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ResultState {
    Success,
    Error,
    Warning,
    Info,
}

impl ResultState {
    /// The stable wire code for this state
    pub const fn code(self) -> i32 {
        match self {
            ResultState::Success => 0,
            ResultState::Error => -1,
            ResultState::Warning => -2,
            ResultState::Info => 1,
        }
    }

    /// Whether this is the `Error` state
    pub fn is_error(self) -> bool {
        self == ResultState::Error
    }
}

impl From<ResultState> for i32 {
    fn from(state: ResultState) -> Self {
        state.code()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown result state code: {0}")]
pub struct UnknownStateCode(pub i32);

impl TryFrom<i32> for ResultState {
    type Error = UnknownStateCode;

    fn try_from(code: i32) -> Result<Self, UnknownStateCode> {
        match code {
            0 => Ok(ResultState::Success),
            -1 => Ok(ResultState::Error),
            -2 => Ok(ResultState::Warning),
            1 => Ok(ResultState::Info),
            other => Err(UnknownStateCode(other)),
        }
    }
}

impl std::fmt::Display for ResultState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResultState::Success => "success",
            ResultState::Error => "error",
            ResultState::Warning => "warning",
            ResultState::Info => "info",
        };
        write!(f, "{}", name)
    }
}
