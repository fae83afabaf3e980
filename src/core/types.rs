//! Core resource types shared by the classification pipeline and emission.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one resource within a kind.
///
/// Archive identifiers are localization-normalized paths, sound identifiers
/// are raw sound names. Equality is exact string equality.
pub type ResourceId = String;

/// Ordered, duplicate-free collection of resource identifiers.
///
/// Iteration order is first-insertion order, which keeps emitted tables
/// reproducible between runs.
pub type ResourceSet = IndexSet<ResourceId>;

/// Classification of a tracked identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// An archive path, subject to localization normalization
    Archive,
    /// A sound name, never normalized
    Sound,
}

impl ResourceKind {
    /// Both kinds, in emission order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Archive, ResourceKind::Sound];

    /// Column name the kind is written under in its tables.
    pub const fn field_name(self) -> &'static str {
        match self {
            ResourceKind::Archive => "ResourceName",
            ResourceKind::Sound => "SoundName",
        }
    }

    const fn table_prefix(self) -> &'static str {
        match self {
            ResourceKind::Archive => "",
            ResourceKind::Sound => "sound_",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Archive => write!(f, "archive"),
            ResourceKind::Sound => write!(f, "sound"),
        }
    }
}

/// Index of a primary scenario, `1..=N`.
pub type VariantIndex = u32;

/// Output bucket: the common pseudo-variant (index 0) or one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Common,
    Scenario(VariantIndex),
}

impl Bucket {
    /// Numeric bucket index, with `0` reserved for [`Bucket::Common`].
    pub const fn index(self) -> VariantIndex {
        match self {
            Bucket::Common => 0,
            Bucket::Scenario(i) => i,
        }
    }

    /// Table name for this bucket under `kind`, without extension.
    ///
    /// ```
    /// use useres::core::{Bucket, ResourceKind};
    ///
    /// assert_eq!(Bucket::Common.table_name(ResourceKind::Archive), "common");
    /// assert_eq!(Bucket::Scenario(2).table_name(ResourceKind::Sound), "sound_scenario_2");
    /// ```
    pub fn table_name(self, kind: ResourceKind) -> String {
        match self {
            Bucket::Common => format!("{}common", kind.table_prefix()),
            Bucket::Scenario(i) => format!("{}scenario_{}", kind.table_prefix(), i),
        }
    }
}

/// Resolved sets for one resource kind: the common set plus the remainder
/// of every scenario. All sets are pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindResources {
    pub common: ResourceSet,
    /// Scenario sets, position `i` holds scenario `i + 1`.
    pub scenarios: Vec<ResourceSet>,
}

impl KindResources {
    /// Set for `bucket`, or `None` when the scenario index is out of range.
    pub fn get(&self, bucket: Bucket) -> Option<&ResourceSet> {
        match bucket {
            Bucket::Common => Some(&self.common),
            Bucket::Scenario(0) => None,
            Bucket::Scenario(i) => self.scenarios.get(i as usize - 1),
        }
    }

    /// All buckets in emission order with their sets.
    pub fn buckets(&self) -> impl Iterator<Item = (Bucket, &ResourceSet)> {
        std::iter::once((Bucket::Common, &self.common)).chain(
            self.scenarios
                .iter()
                .enumerate()
                .map(|(i, set)| (Bucket::Scenario(i as VariantIndex + 1), set)),
        )
    }
}

/// Fully classified resources of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResources {
    pub level: String,
    pub archives: KindResources,
    pub sounds: KindResources,
}

impl LevelResources {
    pub fn kind(&self, kind: ResourceKind) -> &KindResources {
        match kind {
            ResourceKind::Archive => &self.archives,
            ResourceKind::Sound => &self.sounds,
        }
    }

    /// Number of scenarios the level was classified with.
    pub fn scenario_count(&self) -> usize {
        self.archives.scenarios.len()
    }
}
