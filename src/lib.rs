// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod emit;
pub mod errors;
pub mod io;
pub mod observability;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    Bucket, KindResources, LevelResources, ResourceId, ResourceKind, ResourceSet, VariantIndex,
};

pub use crate::classify::{classify_level, classify_traces, resolve, ClassifierConfig};

pub use crate::config::{LevelConfig, UseResConfig};

pub use crate::emit::{ArchivePackager, ArchiveTree, Compression, TableSerializer};

pub use crate::errors::{Error, Result};
