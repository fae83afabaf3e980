//! Resource classification pipeline.
//!
//! Scenario traces are parsed into per-scenario resource sets, which are
//! then split into one common set plus scenario-specific remainders for
//! each resource kind. Archives and sounds are resolved independently.
//!
//! All traces of a level are read before resolution starts; a missing
//! trace aborts the level before anything is emitted.

pub mod builder;
pub mod normalize;
pub mod parser;
pub mod resolve;

pub use builder::{ClassifierConfig, KindCollection, TraceCollector, VariantTrace};
pub use normalize::{PathNormalizer, DEFAULT_LOCALIZE_PREFIXES};
pub use parser::{parse_line, Markers, TraceReference};
pub use resolve::resolve;

use crate::config::LevelConfig;
use crate::core::LevelResources;
use crate::errors::Result;
use crate::io::TraceSource;
use tracing::{debug, info_span};

/// Classify a level from already loaded trace texts, one per scenario in
/// ascending scenario order.
pub fn classify_traces<'a>(
    level: &str,
    traces: impl IntoIterator<Item = &'a str>,
    config: &ClassifierConfig,
) -> LevelResources {
    let mut collector = TraceCollector::new();
    for text in traces {
        collector.push_text(text, config);
    }
    resolve_collected(level, collector)
}

/// Read every scenario trace of `level` from `source` and classify it.
pub fn classify_level<S: TraceSource + ?Sized>(
    level: &LevelConfig,
    source: &S,
    config: &ClassifierConfig,
) -> Result<LevelResources> {
    let _span = info_span!("classify", level = %level.name).entered();

    let mut collector = TraceCollector::new();
    for variant in 1..=level.scenarios {
        let text = source.read_trace(&level.name, variant)?;
        collector.push_text(&text, config);
    }

    Ok(resolve_collected(&level.name, collector))
}

fn resolve_collected(level: &str, collector: TraceCollector) -> LevelResources {
    let (archives, sounds) = collector.into_parts();
    let archives = resolve(&archives.global, &archives.variants);
    let sounds = resolve(&sounds.global, &sounds.variants);

    debug!(
        level = %level,
        common_archives = archives.common.len(),
        common_sounds = sounds.common.len(),
        "Commonality resolved"
    );

    LevelResources {
        level: level.to_string(),
        archives,
        sounds,
    }
}
