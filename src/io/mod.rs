pub mod paths;
pub mod real;
pub mod traits;

// Re-export I/O traits for convenient access
pub use paths::{output_path, trace_path};
pub use real::GameFilesTraceSource;
pub use traits::TraceSource;
