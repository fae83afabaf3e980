//! Emission of classified resources into a level's UseResource container.
//!
//! Every bucket of both kinds becomes one table under `Stage/csv`. All
//! tables are encoded before the packager is invoked, so a serialization
//! failure never reaches storage.

pub mod container;
pub mod table;
pub mod traits;

pub use container::{unpack, ContainerEntry, EntryKind, TarPackager};
pub use table::{field_hash, ColumnTableSerializer, FieldHashTable};
pub use traits::{ArchiveFile, ArchivePackager, ArchiveTree, Compression, TableSerializer};

use crate::core::{Bucket, LevelResources, ResourceKind};
use crate::errors::{Error, Result};
use std::path::Path;
use tracing::info;

/// Root folder of a UseResource container.
pub const ROOT_FOLDER: &str = "Stage";

/// Folder holding the tables.
pub const TABLE_FOLDER: &str = "Stage/csv";

const TABLE_EXTENSION: &str = "bcsv";

/// Container path of the table for `bucket` under `kind`.
pub fn table_path(bucket: Bucket, kind: ResourceKind) -> String {
    format!(
        "{TABLE_FOLDER}/{}.{TABLE_EXTENSION}",
        bucket.table_name(kind)
    )
}

/// Tree with the table folder and no tables.
pub fn placeholder_tree() -> Result<ArchiveTree> {
    let mut tree = ArchiveTree::new(ROOT_FOLDER);
    tree.create_folder(TABLE_FOLDER)?;
    Ok(tree)
}

/// Encode every bucket of `resources` into a container tree.
///
/// Archive tables come first (`common`, `scenario_1..N`), then sound tables
/// (`sound_common`, `sound_scenario_1..N`).
pub fn build_tree(resources: &LevelResources, serializer: &dyn TableSerializer) -> Result<ArchiveTree> {
    let mut tree = placeholder_tree()?;

    for kind in ResourceKind::ALL {
        for (bucket, set) in resources.kind(kind).buckets() {
            let values: Vec<&str> = set.iter().map(String::as_str).collect();
            let data = serializer
                .encode(kind.field_name(), &values)
                .map_err(|err| match err {
                    Error::Serialize { message, .. } => Error::Serialize {
                        table: bucket.table_name(kind),
                        message,
                    },
                    other => other,
                })?;
            tree.add_file(table_path(bucket, kind), data)?;
        }
    }

    Ok(tree)
}

/// Hands finished trees to the archive packager.
pub struct Emitter<'a> {
    packager: &'a dyn ArchivePackager,
    compression: Compression,
}

impl<'a> Emitter<'a> {
    pub fn new(packager: &'a dyn ArchivePackager, compression: Compression) -> Self {
        Self {
            packager,
            compression,
        }
    }

    /// Serialize all buckets of `resources` and write the container to `dest`.
    pub fn emit(
        &self,
        resources: &LevelResources,
        serializer: &dyn TableSerializer,
        dest: &Path,
    ) -> Result<()> {
        let tree = build_tree(resources, serializer)?;
        self.packager.pack(&tree, dest, self.compression)?;
        info!(
            level = %resources.level,
            tables = tree.files().len(),
            path = %dest.display(),
            "UseResource container written"
        );
        Ok(())
    }

    /// Write a container holding only the table folder.
    pub fn emit_placeholder(&self, dest: &Path) -> Result<()> {
        self.packager.pack(&placeholder_tree()?, dest, self.compression)?;
        info!(path = %dest.display(), "Placeholder container written");
        Ok(())
    }
}
