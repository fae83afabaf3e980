//! Collaborator interfaces used by the emission adapter.
//!
//! The table encoding and the container format live behind these traits;
//! the classification core only hands over ordered identifier lists and a
//! tree of named byte buffers.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Encodes one single-column table, one row per value.
pub trait TableSerializer: Send + Sync {
    /// Encode `values` in order under the column `field`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] when `field` cannot be resolved and
    /// [`Error::Serialize`] when a value cannot be represented.
    fn encode(&self, field: &str, values: &[&str]) -> Result<Vec<u8>>;
}

/// Writes a packed container to storage.
pub trait ArchivePackager: Send + Sync {
    /// Pack `tree` and write it to `dest`.
    ///
    /// Implementations must not leave a partially written container at
    /// `dest` when they fail.
    fn pack(&self, tree: &ArchiveTree, dest: &Path, compression: Compression) -> Result<()>;
}

/// Compression applied to a packed container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None,
    #[default]
    Zstd,
}

/// A file inside an [`ArchiveTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    pub path: String,
    pub data: Vec<u8>,
}

/// Folder and file entries of a container, in insertion order.
///
/// Paths are `/`-separated and relative to the container; every entry
/// lives below the root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTree {
    root: String,
    folders: Vec<String>,
    files: Vec<ArchiveFile>,
}

impl ArchiveTree {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            folders: vec![root.clone()],
            root,
            files: Vec::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Add a folder. The parent folder must already exist.
    pub fn create_folder(&mut self, path: impl Into<String>) -> Result<()> {
        let path = path.into();
        self.check_parent(&path)?;
        if !self.folders.contains(&path) {
            self.folders.push(path);
        }
        Ok(())
    }

    /// Add or replace a file. The parent folder must already exist.
    pub fn add_file(&mut self, path: impl Into<String>, data: Vec<u8>) -> Result<()> {
        let path = path.into();
        self.check_parent(&path)?;
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(file) => file.data = data,
            None => self.files.push(ArchiveFile { path, data }),
        }
        Ok(())
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn files(&self) -> &[ArchiveFile] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&ArchiveFile> {
        self.files.iter().find(|f| f.path == path)
    }

    fn check_parent(&self, path: &str) -> Result<()> {
        let parent = path.rsplit_once('/').map(|(parent, _)| parent);
        match parent {
            Some(parent) if self.folders.iter().any(|f| f == parent) => Ok(()),
            _ => Err(Error::Container(format!(
                "entry {path} has no parent folder in the tree"
            ))),
        }
    }
}
