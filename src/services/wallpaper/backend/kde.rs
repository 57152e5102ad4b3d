use std::{path::Path, time::Duration};

use tokio::time::timeout;
use tracing::{debug, instrument};
use zbus::Connection;

use super::gnome::file_uri;
use crate::services::wallpaper::{ApplyError, proxy::PlasmaShellProxy};

const CALL_NAME: &str = "org.kde.PlasmaShell.evaluateScript";

/// Rewrites the image wallpaper plugin config on every Plasma desktop.
#[instrument(skip(limit))]
pub(crate) async fn apply(path: &Path, limit: Duration) -> Result<(), ApplyError> {
    let script = plasma_script(path);

    let output = timeout(limit, evaluate(&script))
        .await
        .map_err(|_| ApplyError::Timeout {
            program: CALL_NAME.to_string(),
            timeout: limit,
        })??;

    if !output.trim().is_empty() {
        debug!(output = output.trim(), "Plasma script output");
    }

    Ok(())
}

async fn evaluate(script: &str) -> zbus::Result<String> {
    let connection = Connection::session().await?;
    let shell = PlasmaShellProxy::new(&connection).await?;
    shell.evaluate_script(script).await
}

pub(crate) fn plasma_script(path: &Path) -> String {
    let uri = file_uri(path).replace('\\', "\\\\").replace('"', "\\\"");

    format!(
        r#"var allDesktops = desktops();
for (var i = 0; i < allDesktops.length; i++) {{
    var d = allDesktops[i];
    d.wallpaperPlugin = "org.kde.image";
    d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
    d.writeConfig("Image", "{uri}");
}}
"#
    )
}
