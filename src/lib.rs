//! Student gradebook library
//! In-memory record store, analytics, reports and configuration used by the `gradebook` CLI.

pub mod core;
pub mod logger;

pub use crate::core::*;
