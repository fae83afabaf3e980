use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::classify::{ClassifierConfig, Markers, PathNormalizer, DEFAULT_LOCALIZE_PREFIXES};
use crate::core::VariantIndex;
use crate::emit::Compression;
use crate::errors::{Error, Result};

/// One level and the number of its primary scenarios.
///
/// Secret and bonus scenarios are not counted; only scenarios with a
/// regular star have traces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub scenarios: VariantIndex,
}

impl LevelConfig {
    pub fn new(name: impl Into<String>, scenarios: VariantIndex) -> Self {
        Self {
            name: name.into(),
            scenarios,
        }
    }
}

/// Levels processed when no configuration overrides them.
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new("IslandFleetGalaxy", 3),
        LevelConfig::new("YosshiHomeGalaxy", 3),
        LevelConfig::new("DigMineGalaxy", 3),
        LevelConfig::new("MokumokuValleyGalaxy", 2),
        LevelConfig::new("AbekobeGalaxy", 2),
        LevelConfig::new("RedBlueExGalaxy", 2),
    ]
}

fn default_localize_prefixes() -> Vec<String> {
    DEFAULT_LOCALIZE_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Container output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub compression: Compression,
}

/// Root configuration structure for useres
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UseResConfig {
    /// Root of the extracted game files
    pub game_files: PathBuf,

    /// Worker threads for processing levels (0 = one per CPU)
    pub jobs: usize,

    pub levels: Vec<LevelConfig>,

    pub markers: Markers,

    /// Localization folders stripped from archive paths, in priority order
    pub localize_prefixes: Vec<String>,

    pub output: OutputConfig,
}

impl Default for UseResConfig {
    fn default() -> Self {
        Self {
            game_files: PathBuf::from("."),
            jobs: 0,
            levels: default_levels(),
            markers: Markers::default(),
            localize_prefixes: default_localize_prefixes(),
            output: OutputConfig::default(),
        }
    }
}

impl UseResConfig {
    /// Check the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for level in &self.levels {
            if level.name.trim().is_empty() {
                return Err(Error::config("level name must not be empty"));
            }
            if !seen.insert(level.name.as_str()) {
                return Err(Error::config(format!("level {} is listed twice", level.name)));
            }
        }

        if self.markers.archive.is_empty() || self.markers.sound.is_empty() {
            return Err(Error::config("trace markers must not be empty"));
        }
        if self.markers.archive == self.markers.sound {
            return Err(Error::config("archive and sound markers must differ"));
        }

        if self.localize_prefixes.iter().any(String::is_empty) {
            return Err(Error::config("localization prefixes must not be empty"));
        }

        Ok(())
    }

    /// Read-only settings for the classification pipeline.
    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            markers: self.markers.clone(),
            normalizer: PathNormalizer::new(self.localize_prefixes.iter().cloned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = UseResConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.levels.len(), 6);
        assert_eq!(config.localize_prefixes.len(), 14);
        assert_eq!(config.output.compression, Compression::Zstd);
    }

    #[test]
    fn default_classifier_matches_pipeline_defaults() {
        assert_eq!(UseResConfig::default().classifier(), ClassifierConfig::default());
    }

    #[test]
    fn duplicate_levels_are_rejected() {
        let config = UseResConfig {
            levels: vec![
                LevelConfig::new("AbekobeGalaxy", 2),
                LevelConfig::new("AbekobeGalaxy", 1),
            ],
            ..UseResConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_level_name_is_rejected() {
        let config = UseResConfig {
            levels: vec![LevelConfig::new(" ", 1)],
            ..UseResConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_markers_are_rejected() {
        let config = UseResConfig {
            markers: Markers {
                archive: "X ".into(),
                sound: "X ".into(),
            },
            ..UseResConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let config = UseResConfig {
            localize_prefixes: vec![String::new()],
            ..UseResConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_scenario_level_is_allowed() {
        let config = UseResConfig {
            levels: vec![LevelConfig::new("EmptyGalaxy", 0)],
            ..UseResConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
