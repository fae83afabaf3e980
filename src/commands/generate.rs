use super::report::{LevelOutcome, LevelSummary, RunReport};
use crate::classify::{classify_level, ClassifierConfig};
use crate::config::{LevelConfig, UseResConfig};
use crate::emit::{ArchivePackager, Emitter, TableSerializer};
use crate::errors::Result;
use crate::io::{output_path, TraceSource};
use rayon::prelude::*;
use tracing::{info, info_span, warn};

/// Collaborators and settings shared by every level of a `generate` run.
pub struct GenerateContext<'a> {
    config: &'a UseResConfig,
    classifier: ClassifierConfig,
    source: &'a dyn TraceSource,
    serializer: &'a dyn TableSerializer,
    emitter: Emitter<'a>,
}

impl<'a> GenerateContext<'a> {
    pub fn new(
        config: &'a UseResConfig,
        source: &'a dyn TraceSource,
        serializer: &'a dyn TableSerializer,
        packager: &'a dyn ArchivePackager,
    ) -> Self {
        Self {
            config,
            classifier: config.classifier(),
            source,
            serializer,
            emitter: Emitter::new(packager, config.output.compression),
        }
    }
}

/// Classify and emit one level. Nothing is written unless every trace was
/// read and every table encoded.
pub fn generate_level(ctx: &GenerateContext<'_>, level: &LevelConfig) -> Result<LevelSummary> {
    let _span = info_span!("level", name = %level.name).entered();

    let resources = classify_level(level, ctx.source, &ctx.classifier)?;
    let dest = output_path(&ctx.config.game_files, &level.name);
    ctx.emitter.emit(&resources, ctx.serializer, &dest)?;

    Ok(LevelSummary {
        tables: 2 * (resources.scenario_count() + 1),
        common_archives: resources.archives.common.len(),
        common_sounds: resources.sounds.common.len(),
    })
}

/// Run `generate` for every configured level.
pub fn generate(ctx: &GenerateContext<'_>) -> RunReport {
    info!(levels = ctx.config.levels.len(), "Generating UseResource containers");

    let outcomes = ctx
        .config
        .levels
        .par_iter()
        .map(|level| {
            let result = generate_level(ctx, level);
            if let Err(err) = &result {
                warn!(level = %level.name, error = %err, "Level failed");
            }
            LevelOutcome {
                level: level.name.clone(),
                output: output_path(&ctx.config.game_files, &level.name),
                result,
            }
        })
        .collect();

    RunReport { outcomes }
}
