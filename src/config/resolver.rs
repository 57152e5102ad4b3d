use std::path::PathBuf;

use tracing::{info, instrument, warn};

use super::{Acquire, AcquisitionError, DEFAULT_INTERVAL_MINUTES, WallpaperConfig};
use crate::{AutowallpaperError, Result};

/// Configuration values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--morning` path.
    pub morning: Option<PathBuf>,
    /// `--afternoon` path.
    pub afternoon: Option<PathBuf>,
    /// `--evening` path.
    pub evening: Option<PathBuf>,
    /// `--interval` in minutes.
    pub interval_minutes: Option<u64>,
}

impl CliOverrides {
    /// Returns a full configuration when every path was supplied.
    ///
    /// A missing interval falls back to [`DEFAULT_INTERVAL_MINUTES`] and
    /// relative paths are made absolute. Partial
    /// path sets and invalid values yield `None`; there is no field-wise
    /// merge with a stored record.
    pub fn complete(&self) -> Option<WallpaperConfig> {
        let (Some(morning), Some(afternoon), Some(evening)) =
            (&self.morning, &self.afternoon, &self.evening)
        else {
            return None;
        };

        let interval = self.interval_minutes.unwrap_or(DEFAULT_INTERVAL_MINUTES);

        match WallpaperConfig::new(morning, afternoon, evening, interval)
            .and_then(WallpaperConfig::into_absolute)
        {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(error = %e, "Ignoring invalid command line configuration");
                None
            }
        }
    }

    /// True when at least one flag was given.
    pub fn is_partial(&self) -> bool {
        self.morning.is_some()
            || self.afternoon.is_some()
            || self.evening.is_some()
            || self.interval_minutes.is_some()
    }
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Complete set of command line flags.
    Cli,
    /// Previously saved record.
    Stored,
    /// Interactive acquisition.
    Acquired,
}

impl ConfigSource {
    /// True when the configuration is new and should be saved.
    pub fn needs_persisting(self) -> bool {
        !matches!(self, ConfigSource::Stored)
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The configuration the scheduler will run with.
    pub config: WallpaperConfig,
    /// Origin of `config`.
    pub source: ConfigSource,
}

/// Combines CLI flags, the stored record and interactive acquisition.
///
/// Precedence: `reset` discards the stored record, a complete set of CLI
/// flags wins over anything stored, a stored record is used as is, and
/// acquisition runs only when nothing else produced a configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    overrides: CliOverrides,
    stored: Option<WallpaperConfig>,
    reset: bool,
}

impl ConfigResolver {
    /// Creates a resolver over the given inputs.
    pub fn new(overrides: CliOverrides, stored: Option<WallpaperConfig>, reset: bool) -> Self {
        Self {
            overrides,
            stored,
            reset,
        }
    }

    /// Produces the configuration to run with.
    ///
    /// # Arguments
    /// * `acquire` - Interactive capability, `None` when no terminal is available
    ///
    /// # Errors
    /// Returns `AutowallpaperError::ConfigUnavailable` when no source yields a
    /// complete configuration, and `AutowallpaperError::Io` if acquisition
    /// fails on I/O.
    #[instrument(skip(self, acquire), fields(reset = self.reset))]
    pub fn resolve(self, acquire: Option<&mut dyn Acquire>) -> Result<Resolved> {
        let stored = if self.reset {
            info!("Reset requested, ignoring stored configuration");
            None
        } else {
            self.stored
        };

        if let Some(config) = self.overrides.complete() {
            info!("Using configuration from command line");
            return Ok(Resolved {
                config,
                source: ConfigSource::Cli,
            });
        }

        if self.overrides.is_partial() {
            warn!("Incomplete command line configuration ignored, all of --morning, --afternoon and --evening are required");
        }

        if let Some(config) = stored {
            info!("Using stored configuration");
            return Ok(Resolved {
                config,
                source: ConfigSource::Stored,
            });
        }

        let Some(acquire) = acquire else {
            return Err(AutowallpaperError::ConfigUnavailable(
                "provide wallpaper paths and interval using --morning, --afternoon, --evening and --interval"
                    .to_string(),
            ));
        };

        match acquire.acquire() {
            Ok(config) => {
                info!("Using interactively acquired configuration");
                Ok(Resolved {
                    config: config.into_absolute()?,
                    source: ConfigSource::Acquired,
                })
            }
            Err(AcquisitionError::Closed) => Err(AutowallpaperError::ConfigUnavailable(
                "interactive configuration was cancelled".to_string(),
            )),
            Err(AcquisitionError::Io(e)) => Err(AutowallpaperError::Io(e)),
        }
    }
}
