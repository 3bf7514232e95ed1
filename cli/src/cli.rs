//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Pizzeria - route pizza orders through a naive or a factory kitchen
#[derive(Parser, Debug)]
#[command(name = "pizzeria", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Make the given pizza orders
    Make(MakeArgs),

    /// Make the orders listed in a file, one per line
    Run(RunArgs),

    /// Make the classic demonstration orders
    Demo(DemoArgs),

    /// Show how the kitchen types are composed
    Describe,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `make` command.
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Pizza orders, e.g. "ham pizza"
    #[arg(required = true)]
    pub orders: Vec<String>,

    /// Kitchen design to use
    #[arg(long, default_value = "factory")]
    pub design: DesignChoice,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// File with one order per line, or `-` for stdin
    pub file: String,

    /// Kitchen design to use
    #[arg(long, default_value = "factory")]
    pub design: DesignChoice,
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Kitchen design to use
    #[arg(long, default_value = "factory")]
    pub design: DesignChoice,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Kitchen design to run orders through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DesignChoice {
    /// Conditional chains in every consumer
    Naive,
    /// Handler factory shared through a mixin
    #[default]
    Factory,
    /// Run both and compare results
    Both,
}
