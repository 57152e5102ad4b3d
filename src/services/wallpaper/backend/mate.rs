use std::{ffi::OsStr, path::Path, time::Duration};

use crate::services::wallpaper::{ApplyError, command};

const SCHEMA: &str = "org.mate.background";
const KEY: &str = "picture-filename";

pub(crate) async fn apply(path: &Path, limit: Duration) -> Result<(), ApplyError> {
    let args = [
        OsStr::new("set"),
        OsStr::new(SCHEMA),
        OsStr::new(KEY),
        path.as_os_str(),
    ];
    command::run("gsettings", args, limit).await?;
    Ok(())
}
