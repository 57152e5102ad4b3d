/// Desktop wallpaper service
pub mod wallpaper;

pub use wallpaper::{ApplyError, DesktopApplier, DesktopSession, WallpaperApplier};
