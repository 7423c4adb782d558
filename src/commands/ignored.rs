//! Implementation of the `byte-config ignored` command.

use crate::cli::{GlobalArgs, IgnoredArgs};
use byte_config::context::ProjectContext;
use byte_config::error::Result;
use byte_config::index::IgnoreMatcher;
use std::path::{Path, PathBuf};

/// Execute the `byte-config ignored` command.
pub fn cmd_ignored(global: &GlobalArgs, args: IgnoredArgs) -> Result<()> {
    let (resolved, ctx) = super::resolve(global)?;
    print!(
        "{}",
        render_ignored(resolved.ignore(), ctx.as_ref(), &args.paths)
    );
    Ok(())
}

pub(crate) fn render_ignored(
    matcher: &IgnoreMatcher,
    ctx: Option<&ProjectContext>,
    paths: &[PathBuf],
) -> String {
    let mut out = String::new();
    for path in paths {
        let relative: &Path = match ctx {
            Some(ctx) => ctx.relative_path(path),
            None => path,
        };
        let key = relative.to_string_lossy();
        match matcher.matching_pattern(&key) {
            Some(pattern) => {
                out.push_str(&format!("ignored  {}  ({})\n", path.display(), pattern))
            }
            None => out.push_str(&format!("kept     {}\n", path.display())),
        }
    }
    out
}
