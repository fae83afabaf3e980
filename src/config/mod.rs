//! Configuration for useres runs.
//!
//! Settings come from an explicit `--config` file, the nearest
//! `.useres.toml`, or the built-in defaults, in that order.

mod core;
mod loader;

pub use self::core::{default_levels, LevelConfig, OutputConfig, UseResConfig};
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, load_config_near,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
