//! Read-only query surface over a resolved configuration.
//!
//! A `ResolvedConfig` is immutable once built. Share it as
//! `Arc<ResolvedConfig>`; no accessor validates or mutates anything.

use crate::config::{ByteConfig, LintCommand, SyntaxTheme, UiTheme};
use crate::error::Result;
use crate::index::{
    ActiveProvider, DerivedIndex, IgnoreMatcher, LintDispatch, LintInvocation, LspServer,
    resolve_provider,
};
use crate::validate::ValidationReport;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A fully validated, indexed configuration snapshot.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    config: ByteConfig,
    index: DerivedIndex,
    report: ValidationReport,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
    dev_mode: bool,
}

impl ResolvedConfig {
    pub(crate) fn new(
        config: ByteConfig,
        index: DerivedIndex,
        report: ValidationReport,
        source: Option<PathBuf>,
        dev_mode: bool,
    ) -> Self {
        Self {
            config,
            index,
            report,
            source,
            loaded_at: Utc::now(),
            dev_mode,
        }
    }

    /// The typed configuration tree.
    pub fn config(&self) -> &ByteConfig {
        &self.config
    }

    // ========================================================================
    // cli / edit_format
    // ========================================================================

    pub fn ui_theme(&self) -> UiTheme {
        self.config.cli.ui_theme
    }

    pub fn syntax_theme(&self) -> SyntaxTheme {
        self.config.cli.syntax_theme
    }

    pub fn enable_shell_commands(&self) -> bool {
        self.config.edit_format.enable_shell_commands
    }

    pub fn mask_message_count(&self) -> u64 {
        self.config.edit_format.mask_message_count
    }

    // ========================================================================
    // files
    // ========================================================================

    pub fn ignore(&self) -> &IgnoreMatcher {
        &self.index.ignore
    }

    /// Whether the project-relative `path` is excluded from discovery.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.index.ignore.is_ignored(path)
    }

    pub fn watch_enabled(&self) -> bool {
        self.config.files.watch.enable
    }

    // ========================================================================
    // lint
    // ========================================================================

    pub fn lint_enabled(&self) -> bool {
        self.config.lint.enable
    }

    pub fn lint_dispatch(&self) -> &LintDispatch {
        &self.index.lint
    }

    /// Commands for `language`. Empty when linting is disabled.
    pub fn lint_commands_for_language(&self, language: &str) -> Vec<&LintCommand> {
        if !self.lint_enabled() {
            return Vec::new();
        }
        self.index.lint.for_language(language)
    }

    /// Commands for the file at `path`. Empty when linting is disabled.
    pub fn lint_commands_for_path(&self, path: &Path) -> Vec<&LintCommand> {
        if !self.lint_enabled() {
            return Vec::new();
        }
        self.index.lint.for_path(path)
    }

    /// Invocations needed to lint `files`. Empty when linting is disabled.
    pub fn lint_plan<P: AsRef<Path>>(&self, files: &[P]) -> Vec<LintInvocation> {
        if !self.lint_enabled() {
            return Vec::new();
        }
        self.index.lint.plan(files)
    }

    // ========================================================================
    // llm
    // ========================================================================

    /// The provider selected by `llm.model`.
    ///
    /// Fails with `ProviderNotEnabled` if it is disabled or has no API key.
    /// Other providers are never checked.
    pub fn llm_provider(&self) -> Result<ActiveProvider> {
        resolve_provider(&self.config.llm)
    }

    // ========================================================================
    // lsp / web
    // ========================================================================

    pub fn lsp_enabled(&self) -> bool {
        self.index.lsp.is_enabled()
    }

    pub fn lsp_timeout(&self) -> Duration {
        self.index.lsp.timeout()
    }

    pub fn lsp_servers(&self) -> impl Iterator<Item = &LspServer> {
        self.index.lsp.servers()
    }

    pub fn lsp_server_for_path(&self, path: &Path) -> Option<&LspServer> {
        self.index.lsp.server_for_path(path)
    }

    pub fn web_enabled(&self) -> bool {
        self.config.web.enable
    }

    pub fn chrome_binary_location(&self) -> &Path {
        &self.config.web.chrome_binary_location
    }

    // ========================================================================
    // resolution metadata
    // ========================================================================

    /// Whether `BYTE_DEV_MODE` was set when this snapshot was resolved.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Dropped elements and unknown keys seen during validation.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The file this snapshot was read from; `None` means all defaults.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
