use std::{path::Path, time::Duration};

use tracing::debug;

use crate::services::wallpaper::{ApplyError, command};

const SCHEMA: &str = "org.gnome.desktop.background";
const KEY: &str = "picture-uri";
const DARK_KEY: &str = "picture-uri-dark";

pub(crate) async fn apply(path: &Path, limit: Duration) -> Result<(), ApplyError> {
    let uri = file_uri(path);

    command::run("gsettings", ["set", SCHEMA, KEY, uri.as_str()], limit).await?;

    // Only present on GNOME 42 and later.
    if let Err(e) = command::run("gsettings", ["set", SCHEMA, DARK_KEY, uri.as_str()], limit).await {
        debug!(error = %e, "Dark-mode wallpaper key not updated");
    }

    Ok(())
}

pub(crate) fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
