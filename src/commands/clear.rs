use super::report::{LevelOutcome, LevelSummary, RunReport};
use crate::config::UseResConfig;
use crate::emit::{ArchivePackager, Emitter};
use crate::io::output_path;
use rayon::prelude::*;
use tracing::{info, warn};

/// Write a placeholder container for every configured level.
pub fn clear(config: &UseResConfig, packager: &dyn ArchivePackager) -> RunReport {
    info!(levels = config.levels.len(), "Writing placeholder UseResource containers");
    let emitter = Emitter::new(packager, config.output.compression);

    let outcomes = config
        .levels
        .par_iter()
        .map(|level| {
            let output = output_path(&config.game_files, &level.name);
            let result = emitter
                .emit_placeholder(&output)
                .map(|()| LevelSummary::default());
            if let Err(err) = &result {
                warn!(level = %level.name, error = %err, "Level failed");
            }
            LevelOutcome {
                level: level.name.clone(),
                output,
                result,
            }
        })
        .collect();

    RunReport { outcomes }
}
