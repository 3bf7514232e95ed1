//! Pizzeria CLI - route pizza orders through a naive or a factory kitchen.

use std::process::ExitCode;

use clap::Parser;
use pizzeria_cli::cli::{Cli, Command};
use pizzeria_cli::{commands, common};

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Make(args) => Ok(commands::make::run(args)),
        Command::Run(args) => commands::run::run(args),
        Command::Demo(args) => Ok(commands::demo::run(args)),
        Command::Describe => {
            commands::describe::run();
            Ok(ExitCode::SUCCESS)
        }
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => common::error::render_and_exit(e, cli.no_color),
    }
}
