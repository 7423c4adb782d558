//! Live reload of the resolved configuration.
//!
//! A `ConfigHandle` publishes one `Arc<ResolvedConfig>` at a time through an
//! atomic swap. Readers take a snapshot and keep it for as long as they need;
//! a reload only swaps the pointer once the new snapshot fully resolved, so a
//! reader sees either the old config or the new one, never a mix.

mod watcher;


pub use watcher::{ConfigWatcher, DEFAULT_DEBOUNCE, ReloadEvent, ReloadOutcome};

use crate::error::Result;
use crate::resolved::ResolvedConfig;
use crate::resolver::Resolver;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// The currently published configuration plus the means to refresh it.
#[derive(Debug)]
pub struct ConfigHandle {
    current: ArcSwap<ResolvedConfig>,
    resolver: Resolver,
}

impl ConfigHandle {
    /// Resolve once and publish the result.
    pub fn load(resolver: Resolver) -> Result<Self> {
        let resolved = resolver.resolve()?;
        Ok(Self::with_snapshot(resolver, resolved))
    }

    /// Publish an already resolved snapshot.
    pub fn with_snapshot(resolver: Resolver, resolved: ResolvedConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(resolved),
            resolver,
        }
    }

    /// The snapshot in effect right now.
    pub fn snapshot(&self) -> Arc<ResolvedConfig> {
        self.current.load_full()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Re-run the pipeline and publish the result.
    ///
    /// On failure the previous snapshot stays published and the error is
    /// returned.
    pub fn reload(&self) -> Result<Arc<ResolvedConfig>> {
        match self.resolver.resolve() {
            Ok(resolved) => {
                let resolved = Arc::new(resolved);
                self.current.store(Arc::clone(&resolved));
                tracing::info!(
                    path = %self.resolver.path().display(),
                    loaded_at = %resolved.loaded_at(),
                    "config reloaded"
                );
                Ok(resolved)
            }
            Err(e) => {
                tracing::error!(
                    path = %self.resolver.path().display(),
                    error = %e,
                    "config reload rejected, keeping previous config"
                );
                Err(e)
            }
        }
    }
}
