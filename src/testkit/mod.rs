//! Testing infrastructure for useres.
//!
//! In-memory stand-ins for the pipeline's I/O boundaries:
//!
//! - **[`MemoryTraceSource`]**: scenario traces held in memory
//! - **[`RecordingPackager`]**: captures packed trees instead of writing them,
//!   optionally failing for chosen destinations
//! - **[`read_container`]**: decodes a container written to disk
//!
//! # Quick Start
//!
//! ```rust
//! use useres::classify::{classify_level, ClassifierConfig};
//! use useres::config::LevelConfig;
//! use useres::testkit::MemoryTraceSource;
//!
//! let source = MemoryTraceSource::new()
//!     .with_trace("SkyGalaxy", 1, "ARCHIVE /A\nSOUND Wind")
//!     .with_trace("SkyGalaxy", 2, "ARCHIVE /A");
//!
//! let level = LevelConfig::new("SkyGalaxy", 2);
//! let resources = classify_level(&level, &source, &ClassifierConfig::default()).unwrap();
//! assert!(resources.archives.common.contains("/A"));
//! ```

pub mod mock_env;

pub use mock_env::{read_container, MemoryTraceSource, PackedContainer, RecordingPackager};
