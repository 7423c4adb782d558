//! Implementation of the `byte-config check` command.

use crate::cli::GlobalArgs;
use byte_config::error::Result;
use byte_config::resolved::ResolvedConfig;

/// Execute the `byte-config check` command.
///
/// Schema violations surface as the returned error (exit code 2); unknown
/// keys and dropped entries are listed but do not fail the check.
pub fn cmd_check(global: &GlobalArgs) -> Result<()> {
    let (resolved, _) = super::resolve(global)?;
    print!("{}", render_check(&resolved));
    Ok(())
}

pub(crate) fn render_check(resolved: &ResolvedConfig) -> String {
    let mut out = String::new();

    match resolved.source() {
        Some(path) => out.push_str(&format!("Config: {}\n", path.display())),
        None => out.push_str("Config: no config file, using defaults\n"),
    }

    let report = resolved.report();
    for warning in &report.warnings {
        out.push_str(&format!("  ! {}\n", warning));
    }
    for dropped in &report.dropped {
        out.push_str(&format!("  x {}\n", dropped));
    }

    if report.is_clean() {
        out.push_str("OK\n");
    } else {
        out.push_str(&format!(
            "OK with {} warning(s), {} dropped entr{}\n",
            report.warnings.len(),
            report.dropped.len(),
            if report.dropped.len() == 1 { "y" } else { "ies" }
        ));
    }

    out
}
