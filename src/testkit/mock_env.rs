//! In-memory implementations of the trace source and archive packager.
//!
//! Both types are `Send + Sync` so they can back parallel level runs.
//! Internal state uses `Arc<RwLock<_>>` for shared access from clones.

use crate::core::VariantIndex;
use crate::emit::{unpack, ArchivePackager, ArchiveTree, Compression, ContainerEntry};
use crate::errors::{Error, Result};
use crate::io::{trace_path, TraceSource};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Scenario traces keyed by level name and scenario index.
#[derive(Debug, Clone, Default)]
pub struct MemoryTraceSource {
    traces: HashMap<(String, VariantIndex), String>,
}

impl MemoryTraceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the trace of `variant` for `level`.
    pub fn with_trace(
        mut self,
        level: impl Into<String>,
        variant: VariantIndex,
        text: impl Into<String>,
    ) -> Self {
        self.traces.insert((level.into(), variant), text.into());
        self
    }
}

impl TraceSource for MemoryTraceSource {
    fn read_trace(&self, level: &str, variant: VariantIndex) -> Result<String> {
        self.traces
            .get(&(level.to_string(), variant))
            .cloned()
            .ok_or_else(|| Error::MissingTrace {
                level: level.to_string(),
                variant,
                path: trace_path(Path::new(""), level, variant),
                source: io::Error::new(io::ErrorKind::NotFound, "trace not in memory"),
            })
    }
}

/// One call to [`ArchivePackager::pack`] captured by [`RecordingPackager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedContainer {
    pub dest: PathBuf,
    pub tree: ArchiveTree,
    pub compression: Compression,
}

/// Packager that records containers in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingPackager {
    written: Arc<RwLock<Vec<PackedContainer>>>,
    failing: HashSet<PathBuf>,
}

impl RecordingPackager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every pack request targeting `dest`.
    pub fn failing_for(mut self, dest: impl Into<PathBuf>) -> Self {
        self.failing.insert(dest.into());
        self
    }

    /// Containers packed so far, in call order.
    pub fn written(&self) -> Vec<PackedContainer> {
        self.written
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The container packed for `dest`, if any.
    pub fn written_to(&self, dest: &Path) -> Option<PackedContainer> {
        self.written().into_iter().find(|c| c.dest == dest)
    }
}

impl ArchivePackager for RecordingPackager {
    fn pack(&self, tree: &ArchiveTree, dest: &Path, compression: Compression) -> Result<()> {
        if self.failing.contains(dest) {
            return Err(Error::packaging(
                dest,
                io::Error::new(io::ErrorKind::PermissionDenied, "destination not writable"),
            ));
        }
        self.written
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PackedContainer {
                dest: dest.to_path_buf(),
                tree: tree.clone(),
                compression,
            });
        Ok(())
    }
}

/// Read and decode the container stored at `path`.
pub fn read_container(path: &Path) -> Result<Vec<ContainerEntry>> {
    let bytes = std::fs::read(path)?;
    unpack(&bytes)
}
