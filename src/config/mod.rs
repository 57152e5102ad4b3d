//! Wallpaper configuration schema, validation and resolution.
//!
//! The configuration is a flat record of three image paths and a cycle
//! interval. It is resolved once at startup from CLI flags, the stored
//! record, or interactive acquisition, and never mutated afterwards.

mod acquisition;
mod paths;
mod resolver;


pub use acquisition::{Acquire, AcquisitionError, TerminalAcquisition};
pub use paths::ConfigPaths;
pub use resolver::{CliOverrides, ConfigResolver, ConfigSource, Resolved};

use std::path::{self, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{AutowallpaperError, Result};

/// Cycle interval used when the CLI supplies all paths but no interval.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 10;

/// Persisted wallpaper configuration.
///
/// All three paths must be non-empty and `interval_minutes` must be at
/// least one. Whether the image files exist is checked when they are
/// applied, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperConfig {
    /// Image shown from 06:00 until noon.
    pub morning: PathBuf,

    /// Image shown from noon until 18:00.
    pub afternoon: PathBuf,

    /// Image shown from 18:00 until 06:00.
    pub evening: PathBuf,

    /// Minutes to sleep between scheduler cycles.
    #[serde(rename = "interval")]
    pub interval_minutes: u64,
}

impl WallpaperConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    /// Returns `AutowallpaperError::InvalidConfig` if a path is empty or the
    /// interval is zero.
    pub fn new(
        morning: impl Into<PathBuf>,
        afternoon: impl Into<PathBuf>,
        evening: impl Into<PathBuf>,
        interval_minutes: u64,
    ) -> Result<Self> {
        let config = Self {
            morning: morning.into(),
            afternoon: afternoon.into(),
            evening: evening.into(),
            interval_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    /// Returns `AutowallpaperError::InvalidConfig` naming the first field
    /// that is empty or out of range.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("morning", &self.morning),
            ("afternoon", &self.afternoon),
            ("evening", &self.evening),
        ] {
            if is_blank(path) {
                return Err(AutowallpaperError::invalid(field, "path must not be empty"));
            }
        }

        if self.interval_minutes == 0 {
            return Err(AutowallpaperError::invalid(
                "interval",
                "must be at least 1 minute",
            ));
        }

        Ok(())
    }

    /// Anchors relative paths at the current working directory.
    ///
    /// Backends build `file://` URIs from these paths, which need to be
    /// absolute.
    ///
    /// # Errors
    /// Returns `AutowallpaperError::InvalidConfig` if the working directory
    /// cannot be determined.
    pub fn into_absolute(self) -> Result<Self> {
        Ok(Self {
            morning: absolute("morning", self.morning)?,
            afternoon: absolute("afternoon", self.afternoon)?,
            evening: absolute("evening", self.evening)?,
            interval_minutes: self.interval_minutes,
        })
    }
}

fn absolute(field: &str, path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    path::absolute(&path).map_err(|e| {
        AutowallpaperError::invalid(field, format!("cannot resolve {}: {e}", path.display()))
    })
}

pub(crate) fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}
