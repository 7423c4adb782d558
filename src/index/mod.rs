//! Derived indexes built once per resolution.
//!
//! The validated config is fixed data; consumers ask questions of it ("is this
//! path ignored", "which linters run on a `.py` file") through these lookups
//! instead of re-scanning the tree each time.

mod ignore;
mod language;
mod lint;
mod lsp;
mod provider;

#[cfg(test)]
mod tests;

pub use ignore::IgnoreMatcher;
pub use language::{extension_of, language_for_path};
pub use lint::{LintDispatch, LintInvocation};
pub use lsp::{LspIndex, LspServer};
pub use provider::{ActiveProvider, resolve_provider};

use crate::config::ByteConfig;
use crate::validate::Violation;

/// Every lookup derived from a validated config.
#[derive(Debug, Clone, Default)]
pub struct DerivedIndex {
    pub ignore: IgnoreMatcher,
    pub lint: LintDispatch,
    pub lsp: LspIndex,
}

impl DerivedIndex {
    /// Build all indexes. Ignore patterns that fail to compile are returned
    /// as dropped elements.
    pub fn build(config: &ByteConfig) -> (Self, Vec<Violation>) {
        let (ignore, rejected) = IgnoreMatcher::compile(&config.files.ignore);
        let index = Self {
            ignore,
            lint: LintDispatch::build(&config.lint.commands),
            lsp: LspIndex::build(&config.lsp),
        };

        tracing::debug!(
            ignore_patterns = index.ignore.len(),
            lint_commands = index.lint.commands().len(),
            lsp_servers = config.lsp.servers.len(),
            "derived indexes built"
        );

        (index, rejected)
    }
}
