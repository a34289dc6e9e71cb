//! CLI command handlers for `gradebook`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod report;
pub mod shell;
