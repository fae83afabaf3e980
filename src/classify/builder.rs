//! Per-scenario resource set construction.
//!
//! Each scenario trace is folded into one ordered, duplicate-free set per
//! resource kind. A global set per kind records every identifier seen so
//! far, in first-seen order across scenarios in the order they were added.

use super::normalize::PathNormalizer;
use super::parser::{parse_line, trace_lines, Markers};
use crate::core::{ResourceKind, ResourceSet};
use tracing::debug;

/// Read-only settings shared by every classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub markers: Markers,
    pub normalizer: PathNormalizer,
}

/// Resource sets extracted from a single scenario trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTrace {
    pub archives: ResourceSet,
    pub sounds: ResourceSet,
}

impl VariantTrace {
    /// Parse a full trace text.
    pub fn parse(text: &str, config: &ClassifierConfig) -> Self {
        let mut trace = Self::default();
        for line in trace_lines(text) {
            let Some(reference) = parse_line(line, &config.markers) else {
                continue;
            };
            match reference.kind {
                ResourceKind::Archive => {
                    let path = config.normalizer.normalize(reference.raw);
                    insert_new(&mut trace.archives, path);
                }
                ResourceKind::Sound => insert_new(&mut trace.sounds, reference.raw),
            }
        }
        trace
    }

    pub fn get(&self, kind: ResourceKind) -> &ResourceSet {
        match kind {
            ResourceKind::Archive => &self.archives,
            ResourceKind::Sound => &self.sounds,
        }
    }
}

fn insert_new(set: &mut ResourceSet, id: &str) {
    if !set.contains(id) {
        set.insert(id.to_string());
    }
}

/// Scenario sets and the global enumeration domain for one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCollection {
    pub global: ResourceSet,
    /// Position `i` holds scenario `i + 1`.
    pub variants: Vec<ResourceSet>,
}

impl KindCollection {
    fn push(&mut self, set: ResourceSet) {
        for id in &set {
            if !self.global.contains(id) {
                self.global.insert(id.clone());
            }
        }
        self.variants.push(set);
    }
}

/// Accumulates scenario traces of one level in ascending scenario order.
#[derive(Debug, Clone, Default)]
pub struct TraceCollector {
    archives: KindCollection,
    sounds: KindCollection,
}

impl TraceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next scenario. Scenarios must be added in ascending order.
    pub fn push(&mut self, trace: VariantTrace) {
        debug!(
            scenario = self.archives.variants.len() + 1,
            archives = trace.archives.len(),
            sounds = trace.sounds.len(),
            "Scenario trace collected"
        );
        self.archives.push(trace.archives);
        self.sounds.push(trace.sounds);
    }

    /// Parse `text` and add it as the next scenario.
    pub fn push_text(&mut self, text: &str, config: &ClassifierConfig) {
        self.push(VariantTrace::parse(text, config));
    }

    pub fn scenario_count(&self) -> usize {
        self.archives.variants.len()
    }

    pub fn kind(&self, kind: ResourceKind) -> &KindCollection {
        match kind {
            ResourceKind::Archive => &self.archives,
            ResourceKind::Sound => &self.sounds,
        }
    }

    pub fn into_parts(self) -> (KindCollection, KindCollection) {
        (self.archives, self.sounds)
    }
}
