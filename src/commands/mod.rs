//! Command implementations for byte-config.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command resolves the config through the library and
//! renders the part it is about; rendering is kept in pure functions so it can
//! be tested without touching stdout.

mod check;
mod ignored;
mod lint;
mod provider;
mod schema;
mod show;
mod watch;


use crate::cli::{Command, GlobalArgs};
use byte_config::config::EnvOverrides;
use byte_config::context::ProjectContext;
use byte_config::error::Result;
use byte_config::resolved::ResolvedConfig;
use byte_config::resolver::Resolver;

/// Dispatch a command to its implementation.
pub fn dispatch(global: &GlobalArgs, command: Command) -> Result<()> {
    match command {
        Command::Check => check::cmd_check(global),
        Command::Show(args) => show::cmd_show(global, args),
        Command::Schema => schema::cmd_schema(),
        Command::Ignored(args) => ignored::cmd_ignored(global, args),
        Command::Lint(args) => lint::cmd_lint(global, args),
        Command::Provider => provider::cmd_provider(global),
        Command::Watch => watch::cmd_watch(global),
    }
}

/// Config location for this invocation, plus the project when one was found.
fn locate(global: &GlobalArgs) -> Result<(Resolver, Option<ProjectContext>)> {
    let env = EnvOverrides::from_env();
    match &global.config {
        Some(path) => Ok((
            Resolver::new(path, env),
            ProjectContext::resolve().ok(),
        )),
        None => {
            let ctx = ProjectContext::resolve()?;
            Ok((Resolver::for_project(&ctx, env), Some(ctx)))
        }
    }
}

/// Resolve the config for this invocation.
fn resolve(global: &GlobalArgs) -> Result<(ResolvedConfig, Option<ProjectContext>)> {
    let (resolver, ctx) = locate(global)?;
    Ok((resolver.resolve()?, ctx))
}
