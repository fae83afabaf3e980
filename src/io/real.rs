//! Production implementation of [`TraceSource`] backed by the file system.

use super::paths::trace_path;
use super::traits::TraceSource;
use crate::core::VariantIndex;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads traces from `<root>/UseResourceLogs`.
#[derive(Debug, Clone)]
pub struct GameFilesTraceSource {
    root: PathBuf,
}

impl GameFilesTraceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TraceSource for GameFilesTraceSource {
    fn read_trace(&self, level: &str, variant: VariantIndex) -> Result<String> {
        let path = trace_path(&self.root, level, variant);
        debug!(path = %path.display(), "Reading trace");
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => {
                return Err(Error::MissingTrace {
                    level: level.to_string(),
                    variant,
                    path,
                    source,
                })
            }
        };
        String::from_utf8(bytes).map_err(|source| Error::TraceEncoding {
            level: level.to_string(),
            variant,
            path,
            source,
        })
    }
}
