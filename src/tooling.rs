//! Tooling & Integration Layer
//!
//! Command-line surface over the catalog pipeline. The zero-argument
//! invocation is the site build step; the other commands inspect the same
//! catalog without writing anything.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
