//! Command-line interface: the clap command tree and one handler per command.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
