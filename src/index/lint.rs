//! Language to lint command dispatch.

use super::language::{extension_of, language_for_path, normalize_language};
use crate::config::LintCommand;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Lint commands indexed by language.
///
/// Commands that name languages are returned first, in declaration order,
/// followed by every wildcard command (empty `languages`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintDispatch {
    commands: Vec<LintCommand>,
    by_language: BTreeMap<String, Vec<usize>>,
    wildcards: Vec<usize>,
}

/// One command to run against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintInvocation {
    pub file: PathBuf,
    /// Full argv; the file path is the last argument.
    pub argv: Vec<String>,
}

impl LintDispatch {
    pub fn build(commands: &[LintCommand]) -> Self {
        let mut by_language: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut wildcards = Vec::new();

        for (i, command) in commands.iter().enumerate() {
            if command.is_wildcard() {
                wildcards.push(i);
                continue;
            }
            for language in &command.languages {
                let key = normalize_language(language);
                if key.is_empty() {
                    continue;
                }
                let entry = by_language.entry(key).or_default();
                if entry.last() != Some(&i) {
                    entry.push(i);
                }
            }
        }

        Self {
            commands: commands.to_vec(),
            by_language,
            wildcards,
        }
    }

    /// Every command, in declaration order.
    pub fn commands(&self) -> &[LintCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Languages named by at least one command.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.by_language.keys().map(String::as_str)
    }

    /// Commands for a language name or bare extension, case-insensitive.
    pub fn for_language(&self, language: &str) -> Vec<&LintCommand> {
        let key = normalize_language(language);
        let specific = self.by_language.get(&key).map(Vec::as_slice).unwrap_or(&[]);
        self.resolve(specific.to_vec())
    }

    /// Commands for a file, matched by detected language or by extension.
    pub fn for_path(&self, path: &Path) -> Vec<&LintCommand> {
        let mut specific = Vec::new();
        let keys = language_for_path(path)
            .map(str::to_string)
            .into_iter()
            .chain(extension_of(path));
        for key in keys {
            if let Some(indices) = self.by_language.get(&key) {
                specific.extend_from_slice(indices);
            }
        }
        specific.sort_unstable();
        specific.dedup();
        self.resolve(specific)
    }

    /// Every invocation needed to lint `files`, file by file.
    pub fn plan<P: AsRef<Path>>(&self, files: &[P]) -> Vec<LintInvocation> {
        files
            .iter()
            .flat_map(|file| {
                let file = file.as_ref();
                self.for_path(file).into_iter().map(move |command| {
                    let mut argv = command.command.clone();
                    argv.push(file.display().to_string());
                    LintInvocation {
                        file: file.to_path_buf(),
                        argv,
                    }
                })
            })
            .collect()
    }

    fn resolve(&self, specific: Vec<usize>) -> Vec<&LintCommand> {
        specific
            .into_iter()
            .chain(self.wildcards.iter().copied())
            .filter_map(|i| self.commands.get(i))
            .collect()
    }
}
