//! Autowallpaper - time-of-day wallpaper switcher for Linux desktops.
//!
//! Picks one of three images depending on the local clock and applies it
//! through whichever desktop session is running. The main pieces are:
//!
//! - Persisted configuration with CLI and interactive acquisition
//! - Time-windowed scheduler with cooperative shutdown
//! - Desktop environment abstraction for applying wallpapers
//! - Foreground/background process lifecycle
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autowallpaper::config_store::ConfigStore;
//!
//! let store = ConfigStore::at_default_location()?;
//! if let Some(config) = store.load() {
//!     println!("Morning wallpaper: {}", config.morning.display());
//! }
//! # Ok::<(), autowallpaper::AutowallpaperError>(())
//! ```

/// Wallpaper configuration record, resolution and acquisition.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Flat-file persistence for the wallpaper configuration.
pub mod config_store;

/// Command-line arguments.
pub mod cli;

/// Desktop integration services.
pub mod services;

/// Time-of-day scheduling loop.
pub mod scheduler;

/// Foreground/background execution and shutdown.
pub mod lifecycle;

/// Logging initialisation.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{AutowallpaperError, Result};
