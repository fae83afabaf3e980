//! End-to-end runs of `generate` and `clear` against a game file tree on disk.

use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use useres::commands::{self, GenerateContext};
use useres::emit::{field_hash, ColumnTableSerializer, ContainerEntry, EntryKind, TarPackager};
use useres::io::{output_path, trace_path, GameFilesTraceSource};
use useres::testkit::read_container;
use useres::{Compression, Error, LevelConfig, UseResConfig};

fn write_trace(root: &Path, level: &str, variant: u32, text: &str) {
    let path = trace_path(root, level, variant);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn config_for(root: &Path, levels: Vec<LevelConfig>) -> UseResConfig {
    UseResConfig {
        game_files: root.to_path_buf(),
        levels,
        ..UseResConfig::default()
    }
}

fn run_generate(config: &UseResConfig) -> commands::RunReport {
    let source = GameFilesTraceSource::new(&config.game_files);
    let serializer = ColumnTableSerializer::default();
    let packager = TarPackager::new();
    let ctx = GenerateContext::new(config, &source, &serializer, &packager);
    commands::generate(&ctx)
}

fn table<'a>(entries: &'a [ContainerEntry], name: &str) -> &'a str {
    let path = format!("Stage/csv/{name}.bcsv");
    let entry = entries
        .iter()
        .find(|e| e.path == path)
        .unwrap_or_else(|| panic!("missing table {path}"));
    std::str::from_utf8(&entry.data).unwrap()
}

fn rows(text: &str) -> Vec<&str> {
    text.lines().skip(1).collect()
}

#[test]
fn generate_writes_classified_tables() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_trace(
        root,
        "TestGalaxy",
        1,
        indoc! {"
            ARCHIVE /LocalizeData/JpJapanese/Map/A
            SOUND Wind
        "},
    );
    write_trace(
        root,
        "TestGalaxy",
        2,
        "ARCHIVE /LocalizeData/UsEnglish/Map/A\r\nARCHIVE /Map/B\r\nSOUND Wind\r\n",
    );
    let config = config_for(root, vec![LevelConfig::new("TestGalaxy", 2)]);

    let report = run_generate(&config);
    assert!(report.is_success(), "{:?}", report.outcomes);

    let entries = read_container(&output_path(root, "TestGalaxy")).unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Stage",
            "Stage/csv",
            "Stage/csv/common.bcsv",
            "Stage/csv/scenario_1.bcsv",
            "Stage/csv/scenario_2.bcsv",
            "Stage/csv/sound_common.bcsv",
            "Stage/csv/sound_scenario_1.bcsv",
            "Stage/csv/sound_scenario_2.bcsv",
        ]
    );

    assert_eq!(rows(table(&entries, "common")), vec!["/Map/A"]);
    assert!(rows(table(&entries, "scenario_1")).is_empty());
    assert_eq!(rows(table(&entries, "scenario_2")), vec!["/Map/B"]);
    assert_eq!(rows(table(&entries, "sound_common")), vec!["Wind"]);
    assert!(rows(table(&entries, "sound_scenario_1")).is_empty());
    assert!(rows(table(&entries, "sound_scenario_2")).is_empty());

    let header = table(&entries, "common").lines().next().unwrap();
    assert_eq!(header, format!("ResourceName:{:08x}", field_hash("ResourceName")));
}

#[test]
fn generate_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_trace(root, "RepeatGalaxy", 1, "ARCHIVE /B\nARCHIVE /A\nSOUND S\n");
    write_trace(root, "RepeatGalaxy", 2, "ARCHIVE /A\nSOUND T\n");
    let config = config_for(root, vec![LevelConfig::new("RepeatGalaxy", 2)]);
    let out = output_path(root, "RepeatGalaxy");

    assert!(run_generate(&config).is_success());
    let first = fs::read(&out).unwrap();
    assert!(run_generate(&config).is_success());
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_trace_leaves_no_output_and_other_levels_continue() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_trace(root, "BrokenGalaxy", 1, "ARCHIVE /A\n");
    write_trace(root, "FineGalaxy", 1, "ARCHIVE /A\n");
    let config = config_for(
        root,
        vec![
            LevelConfig::new("BrokenGalaxy", 2),
            LevelConfig::new("FineGalaxy", 1),
        ],
    );

    let report = run_generate(&config);

    assert!(matches!(
        report.outcomes[0].result,
        Err(Error::MissingTrace { variant: 2, .. })
    ));
    assert!(report.outcomes[1].result.is_ok());
    assert!(!output_path(root, "BrokenGalaxy").exists());
    assert!(output_path(root, "FineGalaxy").exists());
    assert!(report.into_result().is_err());
}

#[test]
fn clear_writes_placeholder_with_folder_only() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let config = config_for(root, vec![LevelConfig::new("AbekobeGalaxy", 2)]);

    let report = commands::clear(&config, &TarPackager::new());
    assert!(report.is_success());

    let entries = read_container(&output_path(root, "AbekobeGalaxy")).unwrap();
    let listing: Vec<_> = entries.iter().map(|e| (e.path.as_str(), e.kind)).collect();
    assert_eq!(
        listing,
        vec![("Stage", EntryKind::Folder), ("Stage/csv", EntryKind::Folder)]
    );
}

#[test]
fn clear_replaces_generated_container() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_trace(root, "SwapGalaxy", 1, "ARCHIVE /A\n");
    let config = config_for(root, vec![LevelConfig::new("SwapGalaxy", 1)]);

    assert!(run_generate(&config).is_success());
    assert!(commands::clear(&config, &TarPackager::new()).is_success());

    let entries = read_container(&output_path(root, "SwapGalaxy")).unwrap();
    assert!(entries.iter().all(|e| e.kind == EntryKind::Folder));
}

#[test]
fn uncompressed_output_is_plain_tar() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_trace(root, "PlainGalaxy", 1, "SOUND S\n");
    let mut config = config_for(root, vec![LevelConfig::new("PlainGalaxy", 1)]);
    config.output.compression = Compression::None;

    assert!(run_generate(&config).is_success());

    let bytes = fs::read(output_path(root, "PlainGalaxy")).unwrap();
    assert_eq!(&bytes[257..262], b"ustar");
}
