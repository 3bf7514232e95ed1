//! The `demo` command - make the classic demonstration orders.

use std::process::ExitCode;

use pizzeria::DEMO_ORDERS;

use crate::cli::DemoArgs;

use super::make::serve;

/// Run the demo command.
pub fn run(args: DemoArgs) -> ExitCode {
    serve(&DEMO_ORDERS, args.design)
}
