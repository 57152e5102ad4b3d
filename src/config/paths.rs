use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_NAME: &str = "autowallpaper";
const CONFIG_OVERRIDE_VAR: &str = "AUTOWALLPAPER_CONFIG";

/// Utility struct for locating configuration and log files
///
/// Follows the XDG Base Directory specification for the configuration
/// record and keeps logs under the user's home directory.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "autowallpaper" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .or_else(|| env::var("HOME").ok().map(|home| format!("{home}/.config")))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_NAME))
    }

    /// Returns the path of the persisted wallpaper configuration
    ///
    /// `AUTOWALLPAPER_CONFIG` replaces the whole path when set.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    pub fn config_file() -> Result<PathBuf, Error> {
        if let Some(path) = env::var_os(CONFIG_OVERRIDE_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the application data directory path
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if HOME environment variable is not set or directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let data_dir = env::var("HOME")
            .map(|home| format!("{home}/.{APP_NAME}"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(data_dir);
        std::fs::create_dir_all(&app_dir)?;

        Ok(app_dir)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");
        std::fs::create_dir_all(&log_dir)?;

        Ok(log_dir)
    }
}
