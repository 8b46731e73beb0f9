//! Build metadata

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
