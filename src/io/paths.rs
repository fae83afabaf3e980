//! Locations of scenario traces and UseResource containers inside a game
//! file tree.

use crate::core::VariantIndex;
use std::path::{Path, PathBuf};

/// Folder under the game root holding the scenario traces.
pub const TRACE_DIR: &str = "UseResourceLogs";

/// Folder under the game root holding per-level stage data.
pub const STAGE_DATA_DIR: &str = "StageData";

/// `<root>/UseResourceLogs/<Level>_Scenario<i>.txt`
pub fn trace_path(root: &Path, level: &str, variant: VariantIndex) -> PathBuf {
    root.join(TRACE_DIR)
        .join(format!("{level}_Scenario{variant}.txt"))
}

/// `<root>/StageData/<Level>/<Level>UseResource.arc`
pub fn output_path(root: &Path, level: &str) -> PathBuf {
    root.join(STAGE_DATA_DIR)
        .join(level)
        .join(format!("{level}UseResource.arc"))
}
