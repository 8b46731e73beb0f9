//! C ABI exported by the shared library
//!
//! ```c
//! char *pgapi_dispatch(const char *name, const char *input, const char *config);
//! void  pgapi_free(char *result);
//! ```
//!
//! ## Ownership
//!
//! - The three arguments are borrowed for the duration of the call only.
//!   Their contents are copied before any work starts and the pointers are
//!   never retained. A null argument reads as empty text; invalid UTF-8 is
//!   replaced with U+FFFD.
//! - The returned buffer is a fresh NUL-terminated UTF-8 JSON object
//!   allocated by this library. It is never null and never reused. The
//!   caller owns it and must release it exactly once with [`pgapi_free`]
//!   after copying it into its own memory (for PostgreSQL:
//!   `cstring_to_text(res)` then `pgapi_free(res)`). Releasing it with the
//!   host's own allocator (`free`, `pfree`) is undefined behaviour.

use std::ffi::{c_char, CStr, CString};

use tracing::error;

use super::{handle, INTERNAL_FALLBACK};
use crate::logging;
use crate::registry::{self, ActionRegistry};

const INTERIOR_NUL_FALLBACK: &CStr =
    c"{\"data\":[],\"message\":\"result contained an interior NUL byte\",\"state\":-1}";

/// Dispatch a named action with the process-wide registry.
///
/// # Safety
///
/// Each argument must be null or point to a NUL-terminated string that stays
/// valid and unmodified until this function returns. The returned pointer
/// must be released with [`pgapi_free`].
#[no_mangle]
pub unsafe extern "C" fn pgapi_dispatch(
    name: *const c_char,
    input: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    unsafe { dispatch_with(registry::global(), name, input, config) }
}

/// Guarded body of [`pgapi_dispatch`] for an explicit registry.
///
/// # Safety
///
/// Same contract as [`pgapi_dispatch`].
pub(crate) unsafe fn dispatch_with(
    registry: &ActionRegistry,
    name: *const c_char,
    input: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    let text = super::contain(|| {
        logging::init();
        let name = unsafe { read_text(name) };
        let input = unsafe { read_text(input) };
        let config = unsafe { read_text(config) };
        handle(registry, &name, &input, &config)
    })
    .unwrap_or_else(|panic| {
        error!(
            panic = %panic.message,
            backtrace = %panic.backtrace,
            "Bridge panicked outside of an action"
        );
        INTERNAL_FALLBACK.to_string()
    });
    into_raw(text)
}

/// Release a buffer returned by [`pgapi_dispatch`]. Null is ignored.
///
/// # Safety
///
/// `result` must be null or a pointer returned by [`pgapi_dispatch`] that
/// has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn pgapi_free(result: *mut c_char) {
    if result.is_null() {
        return;
    }
    // Safety: allocated by `CString::into_raw` in `into_raw`.
    drop(unsafe { CString::from_raw(result) });
}

/// Copy a borrowed C string into owned Rust text.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn read_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

fn into_raw(text: String) -> *mut c_char {
    match CString::new(text) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            // serde_json escapes NUL, so only a broken literal gets here
            error!(error = %e, "Result text is not a valid C string");
            INTERIOR_NUL_FALLBACK.to_owned().into_raw()
        }
    }
}
