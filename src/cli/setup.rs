//! Setup and initialization functions for CLI
//!
//! This module contains functions for initializing the runtime environment:
//! configuration lookup and thread pool configuration.

use crate::config::{load_config, load_config_from, UseResConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        tracing::debug!("Thread pool already configured: {}", e);
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

/// Load the explicit configuration file if given, else the nearest one.
pub fn resolve_config(explicit: Option<&Path>) -> Result<UseResConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => load_config().context("Failed to load configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_worker_count_is_kept() {
        assert_eq!(get_worker_count(3), 3);
    }

    #[test]
    fn zero_workers_means_available_parallelism() {
        assert!(get_worker_count(0) >= 1);
    }

    #[test]
    fn missing_explicit_config_fails() {
        let err = resolve_config(Some(Path::new("/nonexistent/useres.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
