//! Project context resolution for byte.
//!
//! Finds the project root (the nearest ancestor holding `.git`) from any
//! working directory and derives where `.byte/config.yaml` lives.

use crate::error::{ConfigError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding byte's per-project state, relative to the project root.
pub const BYTE_DIR: &str = ".byte";

/// Config file name within [`BYTE_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolved paths for a byte project. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// The repository root.
    pub project_root: PathBuf,

    /// `{project_root}/.byte/`
    pub byte_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the project from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectContext)` - Successfully resolved context
    /// * `Err(ConfigError::UserError)` - If not inside a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ConfigError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the project from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let project_root = find_project_root(cwd).ok_or_else(|| {
            ConfigError::UserError(format!(
                "not inside a git repository: {}\n\n\
                 Run byte from within a project, or pass --config <PATH>.",
                cwd.display()
            ))
        })?;

        tracing::debug!(root = %project_root.display(), "project root resolved");

        Ok(Self {
            byte_dir: project_root.join(BYTE_DIR),
            project_root,
        })
    }

    /// Path to `.byte/config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.byte_dir.join(CONFIG_FILE)
    }

    /// Express `path` relative to the project root, for ignore matching.
    ///
    /// Relative paths are returned unchanged; absolute paths outside the
    /// project are returned as given.
    pub fn relative_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

/// Nearest ancestor of `start` (inclusive) containing `.git`.
///
/// Linked worktrees have a `.git` file rather than a directory; both count.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
