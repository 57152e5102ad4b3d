use std::{ffi::OsStr, path::Path, time::Duration};

use crate::services::wallpaper::{ApplyError, command};

pub(crate) async fn apply(path: &Path, limit: Duration) -> Result<(), ApplyError> {
    command::run("feh", [OsStr::new("--bg-scale"), path.as_os_str()], limit).await?;
    Ok(())
}
