//! Compiled `files.ignore` matcher.
//!
//! Patterns follow gitignore conventions:
//! - Blank lines and `#` comments are skipped
//! - A pattern without an inner `/` matches at any depth
//! - A leading or inner `/` anchors the pattern to the project root
//! - A trailing `/` matches directories only
//! - A path is ignored if it, or any directory above it, matches
//!
//! Negation (`!pattern`) is not supported and is rejected like an invalid glob.
//! A backslash escapes the next character, so `\#name` and `\!name` are
//! literal names.

use crate::validate::Violation;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

const IGNORE_PATH: &str = "files.ignore";

/// OR-combination of every valid ignore pattern.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    /// Patterns that match files and directories.
    files: GlobSet,
    files_sources: Vec<String>,
    /// Every pattern, including directory-only ones.
    dirs: GlobSet,
    dirs_sources: Vec<String>,
}

impl IgnoreMatcher {
    /// Compile `patterns`. Invalid patterns are dropped and reported.
    pub fn compile(patterns: &[String]) -> (Self, Vec<Violation>) {
        let mut files = GlobSetBuilder::new();
        let mut files_sources = Vec::new();
        let mut dirs = GlobSetBuilder::new();
        let mut dirs_sources = Vec::new();
        let mut rejected = Vec::new();

        for (index, raw) in patterns.iter().enumerate() {
            let pattern = raw.trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }

            let (glob, dir_only) = match translate(pattern) {
                Ok(translated) => translated,
                Err(reason) => {
                    tracing::warn!(pattern = %raw, reason = %reason, "ignoring invalid ignore pattern");
                    rejected.push(Violation::MalformedArrayElement {
                        path: IGNORE_PATH.to_string(),
                        index,
                        reason,
                    });
                    continue;
                }
            };

            let compiled = match GlobBuilder::new(&glob)
                .literal_separator(true)
                .backslash_escape(true)
                .build() {
                Ok(compiled) => compiled,
                Err(e) => {
                    let reason = format!("invalid glob pattern '{}': {}", raw, e.kind());
                    tracing::warn!(pattern = %raw, reason = %reason, "ignoring invalid ignore pattern");
                    rejected.push(Violation::MalformedArrayElement {
                        path: IGNORE_PATH.to_string(),
                        index,
                        reason,
                    });
                    continue;
                }
            };

            dirs.add(compiled.clone());
            dirs_sources.push(raw.clone());
            if !dir_only {
                files.add(compiled);
                files_sources.push(raw.clone());
            }
        }

        let matcher = Self {
            files: build_set(files),
            files_sources,
            dirs: build_set(dirs),
            dirs_sources,
        };
        (matcher, rejected)
    }

    /// Whether a file at `path` (relative to the project root) is ignored.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.matching_pattern(path).is_some()
    }

    /// Whether the directory at `path` is ignored. Discovery can skip its
    /// whole subtree.
    pub fn is_ignored_dir(&self, path: &str) -> bool {
        let path = normalize_path(path);
        ancestors(&path, true).any(|dir| self.dirs.is_match(dir))
    }

    /// The first pattern that ignores the file at `path`, if any.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        let path = normalize_path(path);
        if path.is_empty() {
            return None;
        }

        for dir in ancestors(&path, false) {
            if let Some(i) = self.dirs.matches(dir).first() {
                return self.dirs_sources.get(*i).map(String::as_str);
            }
        }

        self.files
            .matches(&path)
            .first()
            .and_then(|i| self.files_sources.get(*i))
            .map(String::as_str)
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self::compile(&[]).0
    }
}

/// Translate a gitignore-style pattern to a globset pattern plus whether it
/// only matches directories.
fn translate(pattern: &str) -> Result<(String, bool), String> {
    if pattern.starts_with('!') {
        return Err(format!("negated pattern '{}' is not supported", pattern));
    }

    let dir_only = pattern.ends_with('/');
    let body = pattern.trim_end_matches('/');
    let anchored = body.contains('/');
    let body = body.trim_start_matches('/');

    if body.is_empty() {
        return Err(format!("pattern '{}' matches nothing", pattern));
    }

    let glob = if anchored {
        body.to_string()
    } else {
        format!("**/{}", body)
    };
    Ok((glob, dir_only))
}

fn build_set(builder: GlobSetBuilder) -> GlobSet {
    // Every glob was already compiled individually.
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Normalize a path for matching (forward slashes, no `./` or leading `/`).
fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.trim_end_matches('/').to_string()
}

/// Directory prefixes of `path`, shortest first. Includes `path` itself when
/// `inclusive`.
fn ancestors(path: &str, inclusive: bool) -> impl Iterator<Item = &str> {
    let inner = path
        .match_indices('/')
        .map(move |(i, _)| &path[..i])
        .filter(|prefix| !prefix.is_empty());
    inner.chain(inclusive.then_some(path).filter(|p| !p.is_empty()))
}
