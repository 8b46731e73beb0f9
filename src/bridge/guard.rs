//! Panic containment
//!
//! Unwinding out of an `extern "C"` function into the host is undefined
//! behaviour. Everything that runs below the exported entry point goes
//! through [`contain`], which turns a panic into an ordinary `Err`.

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

/// A panic caught by [`contain`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("panic: {message}")]
pub struct ContainedPanic {
    pub message: String,
    /// Backtrace captured where the panic was caught
    pub backtrace: String,
}

/// Extract a human-readable message from a panic payload.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return (*msg).to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "non-string panic payload".to_string()
}

/// Run `f`, catching any panic it raises.
///
/// The closure only borrows data owned by the current call, so nothing
/// shared is left half-updated when it unwinds.
pub fn contain<T>(f: impl FnOnce() -> T) -> Result<T, ContainedPanic> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| ContainedPanic {
        message: panic_message(payload),
        backtrace: Backtrace::force_capture().to_string(),
    })
}
