//! Exit code constants for the byte-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, no project root, unreadable config)
//! - 2: Config failure (parse or validation)
//! - 3: Selected LLM provider is not usable
//! - 4: File watcher failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing project root, or unreadable config file.
pub const USER_ERROR: i32 = 1;

/// The config file could not be parsed or failed schema validation.
pub const CONFIG_FAILURE: i32 = 2;

/// The selected LLM provider is disabled or has no API key.
pub const PROVIDER_FAILURE: i32 = 3;

/// The config file watcher could not be started.
pub const WATCH_FAILURE: i32 = 4;
