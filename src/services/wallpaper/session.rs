use std::{env, fmt};

/// Environment variable naming the running desktop session.
pub const SESSION_ENV_VAR: &str = "XDG_CURRENT_DESKTOP";

/// Desktop session families with a dedicated wallpaper mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopSession {
    /// XFCE, configured through xfconf.
    Xfce,
    /// GNOME and look-alikes such as Budgie.
    Gnome,
    /// MATE.
    Mate,
    /// KDE Plasma.
    Kde,
    /// Anything unrecognised; uses feh.
    Fallback,
}

impl DesktopSession {
    /// Reads `XDG_CURRENT_DESKTOP` and classifies it.
    pub fn detect() -> Self {
        env::var(SESSION_ENV_VAR)
            .map(|name| Self::from_desktop_name(&name))
            .unwrap_or(DesktopSession::Fallback)
    }

    /// Classifies a desktop name.
    ///
    /// Matching is case-insensitive and by substring, so colon-separated
    /// values like `ubuntu:GNOME` are recognised. Earlier families win.
    pub fn from_desktop_name(name: &str) -> Self {
        let name = name.to_lowercase();

        if name.contains("xfce") {
            DesktopSession::Xfce
        } else if name.contains("gnome") || name.contains("budgie") {
            DesktopSession::Gnome
        } else if name.contains("mate") {
            DesktopSession::Mate
        } else if name.contains("kde") {
            DesktopSession::Kde
        } else {
            DesktopSession::Fallback
        }
    }
}

impl fmt::Display for DesktopSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesktopSession::Xfce => write!(f, "xfce"),
            DesktopSession::Gnome => write!(f, "gnome"),
            DesktopSession::Mate => write!(f, "mate"),
            DesktopSession::Kde => write!(f, "kde"),
            DesktopSession::Fallback => write!(f, "fallback"),
        }
    }
}
