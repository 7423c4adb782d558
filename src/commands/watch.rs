//! Implementation of the `byte-config watch` command.
//!
//! Holds a live-reloading handle and prints one line per reload until
//! interrupted.

use crate::cli::GlobalArgs;
use byte_config::error::Result;
use byte_config::reload::{ConfigHandle, ConfigWatcher, ReloadEvent, ReloadOutcome};
use std::sync::Arc;

/// Execute the `byte-config watch` command.
pub fn cmd_watch(global: &GlobalArgs) -> Result<()> {
    let (resolver, _) = super::locate(global)?;
    let handle = Arc::new(ConfigHandle::load(resolver)?);
    let (_watcher, events) = ConfigWatcher::spawn(Arc::clone(&handle))?;

    println!(
        "Watching {} (Ctrl-C to stop)",
        handle.resolver().path().display()
    );

    for event in events {
        println!("{}", render_event(&event));
    }

    Ok(())
}

pub(crate) fn render_event(event: &ReloadEvent) -> String {
    let at = event.at.format("%Y-%m-%d %H:%M:%S UTC");
    match &event.outcome {
        ReloadOutcome::Applied => format!("[{}] reloaded", at),
        ReloadOutcome::Rejected(reason) => {
            format!("[{}] rejected, keeping previous config:\n{}", at, reason)
        }
    }
}
