//! Common utilities shared across CLI commands.

pub mod error;
pub mod input;

pub use error::{CliError, CliResult};
