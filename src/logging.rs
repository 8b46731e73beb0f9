//! Diagnostic logging for the shared library
//!
//! The host loads this crate as a plain shared library, so nobody installs
//! a `tracing` subscriber for us. [`init`] installs one writing to stderr,
//! which a database server routes to its own log. An already installed
//! global subscriber (for example in the `pgapi` binary or in tests) is
//! left in place.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `EnvFilter` syntax
pub const LOG_ENV: &str = "PGAPI_LOG";

/// Filter used when `PGAPI_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "pgapi_bridge=warn";

static INIT: Once = Once::new();

/// Install the stderr subscriber. Only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    });
}
