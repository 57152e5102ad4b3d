//! Foreground/background execution and orderly shutdown.
//!
//! Foreground mode runs the scheduler attached to the terminal and stops it
//! on SIGINT or SIGTERM. Background mode re-spawns the executable in
//! foreground mode, detached from the terminal, and returns at once. The
//! detached instance is not supervised: if it dies, nothing restarts it.

use std::{
    env,
    ffi::OsString,
    os::unix::process::CommandExt,
    process::{Command, Stdio},
};

use tokio::sync::watch;
use tracing::{info, instrument};

use crate::{AutowallpaperError, Result};

/// Flag marking an instance started by [`detach`].
pub const DETACHED_FLAG: &str = "--detached";

/// Where the scheduler loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Attached to the invoking terminal until interrupted.
    Foreground,
    /// Detached copy of the process, the launcher exits immediately.
    Background,
}

impl RunMode {
    /// Picks the mode from the `--foreground` flag.
    pub fn from_flag(foreground: bool) -> Self {
        if foreground {
            RunMode::Foreground
        } else {
            RunMode::Background
        }
    }
}

/// Sending half of the shutdown signal.
#[derive(Debug)]
pub struct ShutdownTrigger {
    sender: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Asks every [`Shutdown`] receiver to stop.
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }
}

/// Receiving half of the shutdown signal.
///
/// Dropping the [`ShutdownTrigger`] counts as a shutdown request.
#[derive(Debug, Clone)]
pub struct Shutdown {
    receiver: watch::Receiver<bool>,
}

impl Shutdown {
    /// True once shutdown was requested.
    pub fn is_triggered(&self) -> bool {
        *self.receiver.borrow() || self.receiver.has_changed().is_err()
    }

    /// Completes when shutdown is requested.
    pub async fn triggered(&mut self) {
        let _ = self.receiver.wait_for(|stop| *stop).await;
    }
}

/// Creates a connected trigger/receiver pair.
pub fn shutdown_channel() -> (ShutdownTrigger, Shutdown) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownTrigger { sender }, Shutdown { receiver })
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM.
///
/// # Errors
/// Returns `AutowallpaperError::Io` if the signal handlers cannot be installed
pub async fn wait_for_interrupt() -> Result<()> {
    let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }

    Ok(())
}

/// Starts a detached foreground instance of this executable.
///
/// The child gets its own process group so terminal job control signals
/// aimed at the launcher don't reach it, and its standard streams point at
/// the null device. The returned id is the child's pid; the child is not
/// waited on.
///
/// # Arguments
/// * `args` - Arguments for the child, `--foreground` and [`DETACHED_FLAG`] are appended
///
/// # Errors
/// Returns `AutowallpaperError::Spawn` if the executable cannot be located or started
#[instrument(skip(args))]
pub fn detach(args: Vec<OsString>) -> Result<u32> {
    let exe = env::current_exe()
        .map_err(|e| AutowallpaperError::Spawn(format!("cannot locate executable: {e}")))?;

    let child = Command::new(&exe)
        .args(args)
        .arg("--foreground")
        .arg(DETACHED_FLAG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .map_err(|e| AutowallpaperError::Spawn(format!("{}: {e}", exe.display())))?;

    let pid = child.id();
    info!(pid, "Started background instance");
    Ok(pid)
}
