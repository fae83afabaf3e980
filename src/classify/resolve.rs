//! Commonality resolution.
//!
//! The common set is computed against the untouched scenario sets first;
//! only then are common identifiers filtered out of each scenario. The
//! inputs are never mutated, so concurrent runs cannot alias each other.

use crate::core::{KindResources, ResourceSet};

/// Split scenario sets into a common set and per-scenario remainders.
///
/// An identifier of `global` is common iff every scenario contains it.
/// Common entries keep `global` order; remainders keep their own order.
/// With no scenarios the common set is empty.
pub fn resolve(global: &ResourceSet, variants: &[ResourceSet]) -> KindResources {
    if variants.is_empty() {
        return KindResources::default();
    }

    let common: ResourceSet = global
        .iter()
        .filter(|id| variants.iter().all(|set| set.contains(id.as_str())))
        .cloned()
        .collect();

    let scenarios = variants
        .iter()
        .map(|set| {
            set.iter()
                .filter(|id| !common.contains(id.as_str()))
                .cloned()
                .collect()
        })
        .collect();

    KindResources { common, scenarios }
}
