//! Core data model for resource classification.

pub mod types;

pub use types::{
    Bucket, KindResources, LevelResources, ResourceId, ResourceKind, ResourceSet, VariantIndex,
};
