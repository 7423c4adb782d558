//! Config file watcher driving `ConfigHandle::reload`.

use super::ConfigHandle;
use crate::error::{ConfigError, Result};
use chrono::{DateTime, Utc};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// Quiet period after the last change before the config is reloaded.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What a triggered reload did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// A new snapshot was published.
    Applied,
    /// Resolution failed; the previous snapshot stays in effect.
    Rejected(String),
}

/// One reload triggered by a file system event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadEvent {
    pub at: DateTime<Utc>,
    pub outcome: ReloadOutcome,
}

/// Watches the config file and reloads the handle when it changes.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by replacing the file, and a file created after startup, are
/// both picked up. A burst of events (delete then create, several writes)
/// ends in a single reload once the file has been quiet for the debounce
/// period. Dropping the watcher stops it.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching with [`DEFAULT_DEBOUNCE`]. Reload outcomes are sent on
    /// the returned receiver.
    pub fn spawn(handle: Arc<ConfigHandle>) -> Result<(Self, mpsc::Receiver<ReloadEvent>)> {
        Self::spawn_with_debounce(handle, DEFAULT_DEBOUNCE)
    }

    pub fn spawn_with_debounce(
        handle: Arc<ConfigHandle>,
        debounce: Duration,
    ) -> Result<(Self, mpsc::Receiver<ReloadEvent>)> {
        let path = handle.resolver().path().to_path_buf();
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let file_name = path.file_name().map(OsString::from).ok_or_else(|| {
            ConfigError::UserError(format!("config path has no file name: {}", path.display()))
        })?;

        if !dir.is_dir() {
            return Err(ConfigError::UserError(format!(
                "config directory does not exist: {}",
                dir.display()
            )));
        }

        let (changes_tx, changes_rx) = mpsc::channel();
        let (events_tx, events_rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = (event.kind.is_create()
                        || event.kind.is_modify()
                        || event.kind.is_remove())
                        && event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == Some(file_name.as_os_str()));
                    if relevant {
                        tracing::debug!(kind = ?event.kind, "config file change detected");
                        let _ = changes_tx.send(());
                    }
                }
                Err(e) => tracing::error!(error = %e, "config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        std::thread::Builder::new()
            .name("byte-config-reload".to_string())
            .spawn(move || reload_loop(&handle, &changes_rx, &events_tx, debounce))
            .map_err(|e| ConfigError::UserError(format!("failed to start reload thread: {}", e)))?;

        tracing::info!(
            path = %path.display(),
            debounce_ms = debounce.as_millis() as u64,
            "config watcher started"
        );

        Ok((Self { _watcher: watcher }, events_rx))
    }
}

/// Reload once per burst of change notifications. Returns when the sender
/// side (the notify callback) or the event receiver goes away.
pub(super) fn reload_loop(
    handle: &ConfigHandle,
    changes: &mpsc::Receiver<()>,
    events: &mpsc::Sender<ReloadEvent>,
    debounce: Duration,
) {
    while changes.recv().is_ok() {
        loop {
            match changes.recv_timeout(debounce) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }

        tracing::info!("config file changed, reloading");
        let outcome = match handle.reload() {
            Ok(_) => ReloadOutcome::Applied,
            Err(e) => ReloadOutcome::Rejected(e.to_string()),
        };
        let event = ReloadEvent {
            at: Utc::now(),
            outcome,
        };
        if events.send(event).is_err() {
            return;
        }
    }
}
