#![allow(missing_docs)]

use zbus::{Result, proxy};

/// KDE Plasma shell scripting interface proxy
///
/// Exposes the desktop scripting console used to reconfigure wallpapers
#[proxy(
    interface = "org.kde.PlasmaShell",
    default_service = "org.kde.plasmashell",
    default_path = "/PlasmaShell"
)]
pub trait PlasmaShell {
    /// Evaluate a Plasma desktop script and return its printed output
    #[zbus(name = "evaluateScript")]
    fn evaluate_script(&self, script: &str) -> Result<String>;
}
