//! Command-line interface.
//!
//! All flags are optional. Without any, the stored configuration is used,
//! or the user is asked for one on a terminal.

pub mod formatting;

#[cfg(test)]
mod tests;

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::{
    config::{CliOverrides, ConfigSource, WallpaperConfig},
    lifecycle::RunMode,
};

/// Automatically change wallpapers based on time of day (morning, afternoon, evening).
#[derive(Debug, Clone, Parser)]
#[command(name = "autowallpaper", version, about)]
pub struct Cli {
    /// Path to the morning wallpaper (06:00-12:00)
    #[arg(long, value_name = "PATH")]
    pub morning: Option<PathBuf>,

    /// Path to the afternoon wallpaper (12:00-18:00)
    #[arg(long, value_name = "PATH")]
    pub afternoon: Option<PathBuf>,

    /// Path to the evening wallpaper (18:00-06:00)
    #[arg(long, value_name = "PATH")]
    pub evening: Option<PathBuf>,

    /// Interval in minutes between wallpaper checks [default: 10]
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Force reconfiguration, ignoring the saved configuration
    #[arg(long)]
    pub reset: bool,

    /// Stay attached to the terminal instead of running in the background
    #[arg(long)]
    pub foreground: bool,

    /// Set on the instance spawned by the launcher, which already saved the configuration
    #[arg(long, hide = true)]
    pub detached: bool,
}

impl Cli {
    /// Configuration values given as flags.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            morning: self.morning.clone(),
            afternoon: self.afternoon.clone(),
            evening: self.evening.clone(),
            interval_minutes: self.interval,
        }
    }

    /// Whether a configuration from `source` should be written to disk.
    ///
    /// The detached instance receives its configuration as flags from a
    /// launcher that has already handled saving it.
    pub fn persists(&self, source: ConfigSource) -> bool {
        source.needs_persisting() && !self.detached
    }

    /// Selected run mode.
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flag(self.foreground)
    }
}

/// Flags that make a new instance run with exactly `config`.
///
/// Used when detaching, so the background instance does not depend on the
/// record having been saved.
pub fn forwarded_args(config: &WallpaperConfig) -> Vec<OsString> {
    vec![
        "--morning".into(),
        config.morning.clone().into_os_string(),
        "--afternoon".into(),
        config.afternoon.clone().into_os_string(),
        "--evening".into(),
        config.evening.clone().into_os_string(),
        "--interval".into(),
        config.interval_minutes.to_string().into(),
    ]
}
