//! CLI module for useres
//!
//! This module provides the command-line interface for useres, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{Cli, Commands};
pub use setup::{configure_thread_pool, get_worker_count, resolve_config};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    <Cli as clap::Parser>::parse()
}
