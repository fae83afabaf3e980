//! Logging setup.
//!
//! All diagnostics go through `tracing`. The binary installs a formatting
//! subscriber writing to stderr; `RUST_LOG` takes precedence over the
//! verbosity flag.
//!
//! ```ignore
//! use useres::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(1); // info
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Repeated calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
