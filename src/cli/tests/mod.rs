//! Unit tests for CLI module
//!
//! Tests flag parsing and argument forwarding.
//! No external dependencies or actual command execution.

#![allow(clippy::unwrap_used)]

use clap::Parser;

use crate::{
    cli::{Cli, forwarded_args},
    config::{CliOverrides, ConfigSource, WallpaperConfig},
    lifecycle::{DETACHED_FLAG, RunMode},
};

#[test]
fn no_flags_means_background_and_empty_overrides() {
    let cli = Cli::try_parse_from(["autowallpaper"]).unwrap();

    assert_eq!(cli.overrides(), CliOverrides::default());
    assert_eq!(cli.run_mode(), RunMode::Background);
    assert!(!cli.reset);
}

#[test]
fn parses_all_flags() {
    let cli = Cli::try_parse_from([
        "autowallpaper",
        "--morning",
        "/m.png",
        "--afternoon",
        "/a.png",
        "--evening",
        "/e.png",
        "--interval",
        "5",
        "--reset",
        "--foreground",
    ])
    .unwrap();

    assert_eq!(
        cli.overrides().complete(),
        Some(WallpaperConfig::new("/m.png", "/a.png", "/e.png", 5).unwrap())
    );
    assert!(cli.reset);
    assert_eq!(cli.run_mode(), RunMode::Foreground);
}

#[test]
fn rejects_zero_interval() {
    assert!(Cli::try_parse_from(["autowallpaper", "--interval", "0"]).is_err());
}

#[test]
fn rejects_non_numeric_interval() {
    assert!(Cli::try_parse_from(["autowallpaper", "--interval", "soon"]).is_err());
}

#[test]
fn forwarded_args_round_trip_through_parser() {
    let config = WallpaperConfig::new("/m.png", "/a b.png", "/e.png", 7).unwrap();

    let mut argv = vec!["autowallpaper".into()];
    argv.extend(forwarded_args(&config));
    argv.push("--foreground".into());

    let cli = Cli::try_parse_from(argv).unwrap();

    assert_eq!(cli.overrides().complete(), Some(config));
    assert_eq!(cli.run_mode(), RunMode::Foreground);
}

#[test]
fn detached_instance_does_not_save_forwarded_config() {
    let config = WallpaperConfig::new("/m.png", "/a.png", "/e.png", 7).unwrap();

    let mut argv = vec!["autowallpaper".into()];
    argv.extend(forwarded_args(&config));
    argv.push("--foreground".into());
    argv.push(DETACHED_FLAG.into());

    let cli = Cli::try_parse_from(argv).unwrap();

    assert!(cli.detached);
    assert_eq!(cli.run_mode(), RunMode::Foreground);
    assert!(!cli.persists(ConfigSource::Cli));
}

#[test]
fn user_supplied_flags_are_saved() {
    let cli = Cli::try_parse_from([
        "autowallpaper",
        "--morning",
        "/m.png",
        "--afternoon",
        "/a.png",
        "--evening",
        "/e.png",
        "--foreground",
    ])
    .unwrap();

    assert!(!cli.detached);
    assert!(cli.persists(ConfigSource::Cli));
    assert!(!cli.persists(ConfigSource::Stored));
}
