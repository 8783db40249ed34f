//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::output::OutputFormat;
use crate::runtime::DEFAULT_PHP_BINARY;

/// php-envcheck - PHP environment readiness report.
#[derive(Debug, Parser)]
#[command(name = "php-envcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to profile file (overrides ./php-envcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// PHP binary to inspect
    #[arg(long, global = true, env = "PHP_ENVCHECK_PHP", default_value = DEFAULT_PHP_BINARY)]
    pub php: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Produce the readiness report (default if no command specified)
    Report(ReportArgs),

    /// Show the resolved profile
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out the environment dump
    #[arg(long)]
    pub no_dump: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,

    /// Prefix a Content-Type header on stdout for CGI serving
    #[arg(long)]
    pub cgi: bool,

    /// Emit an HTML fragment without the surrounding document
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the JSON Schema of the profile file format
    #[arg(long, conflicts_with = "json")]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
