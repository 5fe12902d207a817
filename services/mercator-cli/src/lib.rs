//! Command-line front end for the Web Mercator projection.
//!
//! Every subcommand prints a single JSON document on stdout. Logs go to
//! stderr so the output can be piped.

pub mod commands;
pub mod config;

pub use commands::{run, Command};
pub use config::Args;
