//! Implementation of the `byte-config show` command.

use crate::cli::{GlobalArgs, ShowArgs};
use byte_config::error::Result;
use byte_config::resolved::ResolvedConfig;

/// Execute the `byte-config show` command.
pub fn cmd_show(global: &GlobalArgs, args: ShowArgs) -> Result<()> {
    let (resolved, _) = super::resolve(global)?;
    print!("{}", render_show(&resolved, args.json)?);
    Ok(())
}

/// The resolved tree with API keys redacted.
pub(crate) fn render_show(resolved: &ResolvedConfig, json: bool) -> Result<String> {
    let redacted = resolved.config().redacted();
    if json {
        Ok(format!("{}\n", redacted.to_json()?))
    } else {
        redacted.to_yaml()
    }
}
