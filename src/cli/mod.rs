//! CLI argument parsing for byte-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve, validate and inspect byte's `.byte/config.yaml`.
///
/// Without `--config`, the file is looked up at `<repo root>/.byte/config.yaml`
/// where the repo root is the nearest ancestor directory containing `.git`.
#[derive(Parser, Debug)]
#[command(name = "byte-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file to use instead of the project's `.byte/config.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available commands for byte-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the config and report problems.
    ///
    /// Prints unknown keys and dropped entries; fails with every schema
    /// violation if the file cannot be used.
    Check,

    /// Print the resolved config with every default filled in.
    ///
    /// API keys are redacted.
    Show(ShowArgs),

    /// List every config field with its type and default.
    Schema,

    /// Report whether paths are excluded by `files.ignore`.
    Ignored(IgnoredArgs),

    /// Show which lint commands apply.
    ///
    /// With `--language`, lists the commands for that language. With files,
    /// prints the command line that would run for each file.
    Lint(LintArgs),

    /// Resolve the active LLM provider.
    Provider,

    /// Watch the config file and report each reload.
    Watch,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `ignored` command.
#[derive(Args, Debug)]
pub struct IgnoredArgs {
    /// Paths relative to the project root.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the `lint` command.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Language name or extension (e.g. python, .py).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Files to plan lint invocations for.
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
