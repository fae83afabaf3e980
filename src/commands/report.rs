use crate::errors::Error;
use std::fmt;
use std::path::PathBuf;

/// What a successful level run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub tables: usize,
    pub common_archives: usize,
    pub common_sounds: usize,
}

/// Result of one level run.
#[derive(Debug)]
pub struct LevelOutcome {
    pub level: String,
    pub output: PathBuf,
    pub result: Result<LevelSummary, Error>,
}

impl fmt::Display for LevelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(summary) => write!(
                f,
                "{}: wrote {} tables ({} common archives, {} common sounds) to {}",
                self.level,
                summary.tables,
                summary.common_archives,
                summary.common_sounds,
                self.output.display()
            ),
            Err(err) => write!(f, "{}: failed: {}", self.level, err),
        }
    }
}

/// Outcomes of all levels, in configuration order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<LevelOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &LevelOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &LevelOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Turn the report into an error naming the failed levels, if any.
    pub fn into_result(self) -> anyhow::Result<()> {
        let failed: Vec<&str> = self.failed().map(|o| o.level.as_str()).collect();
        if failed.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "{} of {} levels failed: {}",
                failed.len(),
                self.outcomes.len(),
                failed.join(", ")
            )
        }
    }
}
