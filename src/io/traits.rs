//! I/O trait definitions for the classification pipeline.
//!
//! Trace access sits behind [`TraceSource`] so the pipeline can be driven
//! from memory in tests and from the game file tree in production.

use crate::core::VariantIndex;
use crate::errors::Result;

/// Provider of scenario trace texts.
///
/// Implementations should be thread-safe (`Send + Sync`) so independent
/// levels can be classified in parallel.
pub trait TraceSource: Send + Sync {
    /// Read the full trace of `variant` for `level`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::Error::MissingTrace`] when the trace does not
    /// exist or cannot be read, and [`crate::errors::Error::TraceEncoding`]
    /// when it is not valid UTF-8.
    fn read_trace(&self, level: &str, variant: VariantIndex) -> Result<String>;
}
