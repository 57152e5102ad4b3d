//! Desktop wallpaper service.
//!
//! Applies an image as the desktop background using the mechanism of the
//! running session: xfconf for XFCE, gsettings for GNOME and MATE, a Plasma
//! script over D-Bus for KDE, and feh everywhere else.

mod backend;
pub(crate) mod command;
mod error;
mod proxy;
mod session;

pub use error::ApplyError;
pub use session::{DesktopSession, SESSION_ENV_VAR};

use std::{path::Path, time::Duration};

use async_trait::async_trait;
use tracing::{debug, instrument};

/// Upper bound for a single external call while applying a wallpaper.
pub const DEFAULT_APPLY_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
/// Something that can set the desktop background
///
/// Implementations report failures through the result and never panic;
/// the scheduler logs the error and retries on its next cycle.
pub trait WallpaperApplier: Send + Sync {
    /// Apply the image at `path` as the wallpaper
    async fn apply(&self, path: &Path) -> Result<(), ApplyError>;
}

/// Applies wallpapers through the detected desktop session
///
/// The session is detected on every call from `XDG_CURRENT_DESKTOP`.
#[derive(Debug, Clone)]
pub struct DesktopApplier {
    timeout: Duration,
}

impl Default for DesktopApplier {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopApplier {
    /// Create an applier with the default per-call timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_APPLY_TIMEOUT)
    }

    /// Create an applier with a custom per-call timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Apply using an explicit session instead of detecting one
    ///
    /// # Errors
    ///
    /// Returns `ApplyError::MissingImage` if `path` is not a file, or the
    /// session backend's error if the external call fails.
    #[instrument(skip(self))]
    pub async fn apply_for(&self, session: DesktopSession, path: &Path) -> Result<(), ApplyError> {
        if !tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
        {
            return Err(ApplyError::MissingImage(path.to_path_buf()));
        }

        match session {
            DesktopSession::Xfce => backend::xfce::apply(path, self.timeout).await,
            DesktopSession::Gnome => backend::gnome::apply(path, self.timeout).await,
            DesktopSession::Mate => backend::mate::apply(path, self.timeout).await,
            DesktopSession::Kde => backend::kde::apply(path, self.timeout).await,
            DesktopSession::Fallback => backend::feh::apply(path, self.timeout).await,
        }
    }
}

#[async_trait]
impl WallpaperApplier for DesktopApplier {
    async fn apply(&self, path: &Path) -> Result<(), ApplyError> {
        let session = DesktopSession::detect();
        debug!(%session, "Detected desktop session");

        self.apply_for(session, path).await
    }
}
