use std::{path::PathBuf, time::Duration};

/// Errors that can occur while applying a wallpaper
#[derive(thiserror::Error, Debug)]
pub enum ApplyError {
    /// The image no longer exists at the configured path
    #[error("image not found: {0}")]
    MissingImage(PathBuf),

    /// The external program could not be started
    #[error("cannot run '{program}': {details}")]
    CommandUnavailable {
        /// Program that failed to start
        program: String,
        /// Error reported by the OS
        details: String,
    },

    /// The external program exited unsuccessfully
    #[error("'{program}' failed with {status}: {stderr}")]
    CommandFailed {
        /// Program that failed
        program: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The external program or D-Bus call did not finish in time
    #[error("'{program}' did not finish within {timeout:?}")]
    Timeout {
        /// Program or call that timed out
        program: String,
        /// The limit that was exceeded
        timeout: Duration,
    },

    /// XFCE reported no `last-image` background properties
    #[error("no 'last-image' properties found in xfce4-desktop")]
    NoBackgroundKeys,

    /// D-Bus communication with the Plasma shell failed
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),
}
