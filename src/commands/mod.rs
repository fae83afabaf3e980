//! CLI command implementations for useres operations.
//!
//! Available commands:
//! - **generate**: classify every configured level from its traces and
//!   write its UseResource container
//! - **clear**: write placeholder containers holding no tables
//!
//! Levels are independent: each run owns its resource sets and touches only
//! its own traces and output path, so levels are processed in parallel. A
//! failed level does not stop the others.

pub mod clear;
pub mod generate;
pub mod report;

pub use clear::clear;
pub use generate::{generate, generate_level, GenerateContext};
pub use report::{LevelOutcome, LevelSummary, RunReport};
