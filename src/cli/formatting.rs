//! Formatting utilities for terminal notices.
//!
//! Styles the few messages the launcher prints directly, outside of the
//! tracing output: startup summary, shutdown notice and fatal errors.

use crate::config::WallpaperConfig;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats success notices
pub fn format_success(text: &str) -> String {
    format!("{}{}{}", Colors::GREEN, text, Colors::RESET)
}

/// Formats error messages with styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Summarises a configuration as one line per window plus the interval
pub fn format_config(config: &WallpaperConfig) -> String {
    let row = |label: &str, value: String| {
        format!("  {}{label:<10}{} {value}", Colors::DIM, Colors::RESET)
    };

    [
        row("morning", config.morning.display().to_string()),
        row("afternoon", config.afternoon.display().to_string()),
        row("evening", config.evening.display().to_string()),
        row("interval", format!("{} min", config.interval_minutes)),
    ]
    .join("\n")
}
