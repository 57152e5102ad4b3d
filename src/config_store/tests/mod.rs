//! Unit tests for config_store module

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{config::WallpaperConfig, config_store::ConfigStore};

#[test]
fn staging_file_sits_next_to_record() {
    let store = ConfigStore::new("/tmp/some/dir/config.toml");

    assert_eq!(
        store.staging_path().to_string_lossy(),
        "/tmp/some/dir/config.toml.tmp"
    );
}

#[test]
fn save_leaves_no_staging_file() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.toml"));
    let config = WallpaperConfig::new("/a.png", "/b.png", "/c.png", 10).unwrap();

    store.save(&config).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["config.toml".to_string()]);
}

#[test]
fn load_rejects_record_failing_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "morning = \"/a.png\"\nafternoon = \"\"\nevening = \"/c.png\"\ninterval = 10\n",
    )
    .unwrap();

    assert!(ConfigStore::new(&path).load().is_none());
}

#[test]
fn load_rejects_zero_interval() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "morning = \"/a.png\"\nafternoon = \"/b.png\"\nevening = \"/c.png\"\ninterval = 0\n",
    )
    .unwrap();

    assert!(ConfigStore::new(&path).load().is_none());
}
