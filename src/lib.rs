//! byte-config: configuration resolution and dispatch for the byte coding
//! assistant.
//!
//! `.byte/config.yaml` is loaded into an untyped tree, validated against a
//! static schema with every default merged in, converted into a typed
//! [`config::ByteConfig`], and indexed for the lookups consumers need
//! (ignore matching, lint dispatch, provider resolution, LSP routing). The
//! result is an immutable [`resolved::ResolvedConfig`] that can be shared
//! across threads, and optionally republished on file changes through
//! [`reload::ConfigHandle`].
//!
//! ```no_run
//! use byte_config::config::EnvOverrides;
//! use byte_config::context::ProjectContext;
//! use byte_config::resolver::Resolver;
//!
//! let ctx = ProjectContext::resolve()?;
//! let resolved = Resolver::for_project(&ctx, EnvOverrides::from_env()).resolve()?;
//! if resolved.is_ignored("node_modules/left-pad/index.js") {
//!     // skip it
//! }
//! # Ok::<(), byte_config::error::ConfigError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod index;
pub mod loader;
pub mod logging;
pub mod reload;
pub mod resolved;
pub mod resolver;
pub mod schema;
pub mod validate;
