//! The resolution pipeline.
//!
//! Load -> validate and merge -> typed model -> environment overrides ->
//! derived indexes. Each stage either produces the input of the next or fails
//! with a `ConfigError`; a `ResolvedConfig` only exists once every stage passed.

use crate::config::{ByteConfig, EnvOverrides};
use crate::context::ProjectContext;
use crate::error::{ConfigError, Result};
use crate::index::DerivedIndex;
use crate::loader::{LoadedTree, load_file, parse_str};
use crate::resolved::ResolvedConfig;
use crate::schema::registry;
use crate::validate::{Validated, Violation, validate};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolves one config file, with one set of environment overrides.
#[derive(Debug, Clone)]
pub struct Resolver {
    path: PathBuf,
    env: EnvOverrides,
}

impl Resolver {
    pub fn new(path: impl Into<PathBuf>, env: EnvOverrides) -> Self {
        Self {
            path: path.into(),
            env,
        }
    }

    /// Resolver for the project's `.byte/config.yaml`.
    pub fn for_project(ctx: &ProjectContext, env: EnvOverrides) -> Self {
        Self::new(ctx.config_path(), env)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn env(&self) -> &EnvOverrides {
        &self.env
    }

    /// Run the full pipeline against the file on disk.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        tracing::debug!(path = %self.path.display(), "resolving config");
        let loaded = load_file(&self.path)?;
        resolve_tree(loaded, &self.env)
    }
}

/// Resolve YAML text that did not come from a file.
pub fn resolve_str(yaml: &str, env: &EnvOverrides) -> Result<ResolvedConfig> {
    let tree = parse_str(yaml, None)?;
    resolve_tree(LoadedTree { tree, source: None }, env)
}

/// Resolve an already loaded tree.
pub fn resolve_tree(loaded: LoadedTree, env: &EnvOverrides) -> Result<ResolvedConfig> {
    let Validated { tree, mut report } = validate(&loaded.tree, registry())?;

    let mut config: ByteConfig = serde_yaml::from_value(tree).map_err(|e| {
        ConfigError::UserError(format!(
            "validated config does not match the typed model: {}",
            e
        ))
    })?;
    env.apply(&mut config);

    let (index, rejected) = DerivedIndex::build(&config);
    drop_rejected_patterns(&mut config, &rejected);
    report.dropped.extend(rejected);

    let source = loaded
        .source
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    tracing::info!(
        source = %source,
        dropped = report.dropped.len(),
        warnings = report.warnings.len(),
        "config resolved"
    );

    Ok(ResolvedConfig::new(
        config,
        index,
        report,
        loaded.source,
        env.dev_mode,
    ))
}

fn drop_rejected_patterns(config: &mut ByteConfig, rejected: &[Violation]) {
    let indexes: BTreeSet<usize> = rejected
        .iter()
        .filter_map(|v| match v {
            Violation::MalformedArrayElement { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    if indexes.is_empty() {
        return;
    }

    let mut i = 0;
    config.files.ignore.retain(|_| {
        let keep = !indexes.contains(&i);
        i += 1;
        keep
    });
}
