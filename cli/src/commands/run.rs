//! The `run` command - make the orders listed in a file.

use std::process::ExitCode;

use crate::cli::RunArgs;
use crate::common::CliResult;
use crate::common::input::{orders, read_input};

use super::make::serve;

/// Run the run command.
pub fn run(args: RunArgs) -> CliResult<ExitCode> {
    let (content, display_name) = read_input(&args.file)?;
    let orders = orders(&content);
    tracing::debug!(file = %display_name, orders = orders.len(), "read orders");
    Ok(serve(&orders, args.design))
}
