use std::{ffi::OsStr, path::Path, time::Duration};

use tracing::{debug, instrument, warn};

use crate::services::wallpaper::{ApplyError, command};

const PROGRAM: &str = "xfconf-query";
const CHANNEL: &str = "xfce4-desktop";
const IMAGE_PROPERTY: &str = "last-image";

/// Sets every `last-image` property, one per monitor and workspace.
#[instrument(skip(limit))]
pub(crate) async fn apply(path: &Path, limit: Duration) -> Result<(), ApplyError> {
    set_all_keys(PROGRAM, path, limit).await
}

/// Every key is attempted even when an earlier one fails; the first
/// failure is returned once all have been tried.
async fn set_all_keys(program: &str, path: &Path, limit: Duration) -> Result<(), ApplyError> {
    let listing = command::run(program, ["-c", CHANNEL, "-l"], limit).await?;
    let keys = last_image_keys(&listing);

    if keys.is_empty() {
        return Err(ApplyError::NoBackgroundKeys);
    }

    let mut first_error = None;
    for key in keys {
        debug!(key, "Updating xfce background property");
        let args = [
            OsStr::new("-c"),
            OsStr::new(CHANNEL),
            OsStr::new("-p"),
            OsStr::new(key),
            OsStr::new("-s"),
            path.as_os_str(),
        ];

        if let Err(e) = command::run(program, args, limit).await {
            warn!(key, error = %e, "Failed to update xfce background property");
            first_error.get_or_insert(e);
        }
    }

    first_error.map_or(Ok(()), Err)
}

pub(crate) fn last_image_keys(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| line.contains(IMAGE_PROPERTY))
        .collect()
}
