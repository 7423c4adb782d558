//! Implementation of the `byte-config lint` command.

use crate::cli::{GlobalArgs, LintArgs};
use byte_config::error::Result;
use byte_config::resolved::ResolvedConfig;

/// Execute the `byte-config lint` command.
pub fn cmd_lint(global: &GlobalArgs, args: LintArgs) -> Result<()> {
    let (resolved, _) = super::resolve(global)?;
    print!("{}", render_lint(&resolved, &args));
    Ok(())
}

pub(crate) fn render_lint(resolved: &ResolvedConfig, args: &LintArgs) -> String {
    if !resolved.lint_enabled() {
        return "lint is disabled (lint.enable: false)\n".to_string();
    }

    let mut out = String::new();

    if let Some(language) = &args.language {
        let commands = resolved.lint_commands_for_language(language);
        if commands.is_empty() {
            out.push_str(&format!("no lint commands for '{}'\n", language));
        }
        for command in commands {
            out.push_str(&format!("{}\n", command.display()));
        }
        return out;
    }

    if !args.files.is_empty() {
        let plan = resolved.lint_plan(&args.files);
        if plan.is_empty() {
            out.push_str("no lint commands apply to the given files\n");
        }
        for invocation in plan {
            out.push_str(&format!("{}\n", shell_words::join(&invocation.argv)));
        }
        return out;
    }

    let commands = resolved.lint_dispatch().commands();
    if commands.is_empty() {
        out.push_str("no lint commands configured\n");
    }
    for (i, command) in commands.iter().enumerate() {
        let languages = if command.is_wildcard() {
            "*".to_string()
        } else {
            command.languages.join(", ")
        };
        out.push_str(&format!("{}. {}  [{}]\n", i + 1, command.display(), languages));
    }
    out
}
