use std::fs;
use std::path::{Path, PathBuf};

use super::core::UseResConfig;
use crate::errors::{Error, Result};

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".useres.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<UseResConfig> {
    let config = toml::from_str::<UseResConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicit configuration file.
///
/// A relative `game_files` is resolved against the file's directory.
pub fn load_config_from(path: &Path) -> Result<UseResConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::config_with_path(format!("failed to read {}: {}", path.display(), e), path)
    })?;

    let mut config = parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Config { message, .. } => Error::config_with_path(message, path),
        Error::Toml(err) => Error::config_with_path(
            format!("failed to parse {}: {}", path.display(), err),
            path,
        ),
        other => other,
    })?;

    if config.game_files.is_relative() {
        if let Some(base) = path.parent() {
            config.game_files = base.join(&config.game_files);
        }
    }

    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.useres.toml` starting at `start`.
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the nearest configuration file, or the built-in defaults when
/// none exists.
///
/// A configuration file that exists but is broken is an error.
pub fn load_config() -> Result<UseResConfig> {
    let current = std::env::current_dir()?;
    load_config_near(current)
}

pub fn load_config_near(start: PathBuf) -> Result<UseResConfig> {
    match find_config_file(start) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(UseResConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use crate::emit::Compression;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_and_validate_config("").unwrap(), UseResConfig::default());
    }

    #[test]
    fn parses_levels_and_output() {
        let config = parse_and_validate_config(indoc! {r#"
            game_files = "/games/smg2"
            jobs = 2

            [[levels]]
            name = "SkyBeachGalaxy"
            scenarios = 3

            [output]
            compression = "none"
        "#})
        .unwrap();

        assert_eq!(config.game_files, PathBuf::from("/games/smg2"));
        assert_eq!(config.jobs, 2);
        assert_eq!(config.levels, vec![LevelConfig::new("SkyBeachGalaxy", 3)]);
        assert_eq!(config.output.compression, Compression::None);
        assert_eq!(config.markers.archive, "ARCHIVE ");
    }

    #[test]
    fn partial_markers_keep_other_default() {
        let config = parse_and_validate_config(indoc! {r#"
            [markers]
            sound = "SE "
        "#})
        .unwrap();
        assert_eq!(config.markers.archive, "ARCHIVE ");
        assert_eq!(config.markers.sound, "SE ");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            parse_and_validate_config("levels = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let result = parse_and_validate_config(indoc! {r#"
            [[levels]]
            name = ""
            scenarios = 1
        "#});
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn relative_game_files_resolve_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "game_files = \"files\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.game_files, dir.path().join("files"));
    }

    #[test]
    fn broken_file_reports_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "jobs = \"many\"\n").unwrap();

        match load_config_from(&path) {
            Err(Error::Config { path: Some(p), .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "jobs = 3\n").unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_config_file(nested),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
        assert_eq!(load_config_near(dir.path().join("a")).unwrap().jobs, 3);
    }

    #[test]
    fn ancestors_are_bounded() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }
}
