//! Error handling utilities for the CLI.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors a command can fail with before any order is made.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("cannot read orders from {path}")]
    #[diagnostic(
        code(pizzeria::read_orders),
        help("pass a readable file with one order per line, or `-` for stdin")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let theme = if no_color {
        GraphicalTheme::unicode_nocolor()
    } else {
        GraphicalTheme::unicode()
    };
    let mut rendered = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut rendered, &error) {
        Ok(()) => eprint!("{}", rendered),
        Err(_) => eprintln!("error: {}", error),
    }
    std::process::exit(1);
}
