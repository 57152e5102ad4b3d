//! Time-of-day scheduling loop.
//!
//! Each cycle reads the clock, picks the window's image and hands it to a
//! [`WallpaperApplier`], then sleeps for the configured interval. Failures
//! are logged and the loop carries on; only a shutdown signal stops it.

mod clock;
mod window;

#[cfg(test)]
mod tests;

pub use clock::{Clock, LocalClock};
pub use window::TimeWindow;

use std::{path::PathBuf, time::Duration};

use tracing::{debug, info, instrument, warn};

use crate::{
    config::WallpaperConfig,
    lifecycle::Shutdown,
    services::wallpaper::{ApplyError, WallpaperApplier},
};

/// Result of a single scheduler cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The window's image was applied.
    Applied {
        /// Window the cycle ran in
        window: TimeWindow,
        /// Image that was applied
        path: PathBuf,
    },
    /// The window has no image configured; nothing was changed.
    Skipped {
        /// Window the cycle ran in
        window: TimeWindow,
    },
    /// Applying the image failed; the next cycle retries.
    Failed {
        /// Window the cycle ran in
        window: TimeWindow,
        /// Why the apply failed
        error: ApplyError,
    },
}

/// Applies the wallpaper matching the current time window, forever.
///
/// The configuration is owned and read-only for the scheduler's lifetime.
pub struct TimeWindowScheduler<A, C = LocalClock> {
    config: WallpaperConfig,
    applier: A,
    clock: C,
    last_window: Option<TimeWindow>,
}

impl<A: WallpaperApplier> TimeWindowScheduler<A, LocalClock> {
    /// Creates a scheduler reading the system clock.
    pub fn new(config: WallpaperConfig, applier: A) -> Self {
        Self::with_clock(config, applier, LocalClock)
    }
}

impl<A: WallpaperApplier, C: Clock> TimeWindowScheduler<A, C> {
    /// Creates a scheduler with an explicit time source.
    pub fn with_clock(config: WallpaperConfig, applier: A, clock: C) -> Self {
        Self {
            config,
            applier,
            clock,
            last_window: None,
        }
    }

    /// Sleep between cycles.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.config.interval_minutes.max(1).saturating_mul(60))
    }

    /// Runs one cycle: classify, look up, apply.
    pub async fn tick(&mut self) -> CycleOutcome {
        let window = TimeWindow::classify(self.clock.now());

        if self.last_window != Some(window) {
            info!(%window, "Entered time window");
            self.last_window = Some(window);
        }

        let Some(path) = window.path_in(&self.config).map(PathBuf::from) else {
            debug!(%window, "No wallpaper configured for window");
            return CycleOutcome::Skipped { window };
        };

        match self.applier.apply(&path).await {
            Ok(()) => {
                debug!(%window, path = %path.display(), "Wallpaper applied");
                CycleOutcome::Applied { window, path }
            }
            Err(error) => {
                warn!(%window, path = %path.display(), %error, "Failed to apply wallpaper, retrying next cycle");
                CycleOutcome::Failed { window, error }
            }
        }
    }

    /// Runs cycles until `shutdown` fires.
    ///
    /// The stop condition is checked before each cycle and raced against
    /// both the apply and the interval sleep, so shutdown is not delayed by
    /// a full interval.
    #[instrument(skip_all, fields(interval_minutes = self.config.interval_minutes))]
    pub async fn run(mut self, mut shutdown: Shutdown) {
        info!("Starting automatic wallpaper changer");
        let interval = self.interval();

        loop {
            if shutdown.is_triggered() {
                break;
            }

            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                _ = self.tick() => {}
            }

            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("Wallpaper scheduler stopped");
    }
}
