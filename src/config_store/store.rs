use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};

use crate::{
    AutowallpaperError, Result,
    config::{ConfigPaths, WallpaperConfig},
};

/// Loads and saves the wallpaper configuration record
///
/// The store is bound to one file path for its lifetime. There is no
/// in-memory cache; every `load` reads the file again.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the standard configuration location
    ///
    /// # Errors
    /// Returns `AutowallpaperError::Io` if the config directory cannot be determined
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(ConfigPaths::config_file()?))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored configuration
    ///
    /// Returns `None` when the file does not exist, cannot be read, is not
    /// valid TOML, or holds a record that fails validation. Problems other
    /// than a missing file are logged as warnings.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Option<WallpaperConfig> {
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Ignoring unusable stored configuration");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<WallpaperConfig>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No stored configuration");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let config: WallpaperConfig = toml::from_str(&content)
            .map_err(|e| AutowallpaperError::toml_parse(e, Some(&self.path)))?;
        config.validate()?;

        info!("Loaded stored configuration");
        Ok(Some(config))
    }

    /// Saves the configuration, replacing any previous record
    ///
    /// Missing parent directories are created. The record is written to a
    /// sibling temporary file and renamed into place so a reader sees
    /// either the old or the new record.
    ///
    /// # Errors
    /// Returns `AutowallpaperError::Persistence` if the record cannot be
    /// serialized, written or moved into place
    #[instrument(skip(self, config), fields(path = %self.path.display()))]
    pub fn save(&self, config: &WallpaperConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AutowallpaperError::persistence(e, parent))?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| AutowallpaperError::persistence(e, &self.path))?;

        let staging = self.staging_path();
        fs::write(&staging, content).map_err(|e| AutowallpaperError::persistence(e, &staging))?;

        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(AutowallpaperError::persistence(e, &self.path));
        }

        info!("Saved configuration");
        Ok(())
    }

    pub(super) fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("config.toml"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
