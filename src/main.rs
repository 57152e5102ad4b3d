//! Autowallpaper launcher - resolves the configuration and runs the scheduler
//!
//! By default the scheduler is detached into a background instance and the
//! launcher exits; `--foreground` keeps it attached until Ctrl+C.

use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, info, span, warn};

use autowallpaper::{
    Result,
    cli::{
        Cli, forwarded_args,
        formatting::{format_config, format_error, format_header, format_success},
    },
    config::{Acquire, ConfigResolver, TerminalAcquisition, WallpaperConfig},
    config_store::ConfigStore,
    lifecycle::{self, RunMode},
    scheduler::TimeWindowScheduler,
    services::DesktopApplier,
    tracing_config,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.run_mode() {
        RunMode::Background => launch_background(&cli),
        RunMode::Foreground => run_foreground(&cli).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", format_error("Error"));
            ExitCode::FAILURE
        }
    }
}

/// Resolves the configuration and hands it to a detached instance.
///
/// Resolution happens here, on the user's terminal, so interactive
/// acquisition still works; the child receives the result as flags.
fn launch_background(cli: &Cli) -> Result<()> {
    tracing_config::init_launcher()?;

    let config = resolve_config(cli)?;
    let pid = lifecycle::detach(forwarded_args(&config))?;

    println!("{}", format_header("Autowallpaper started in the background"));
    println!("{}", format_config(&config));
    println!("  pid {pid}, logs in ~/.autowallpaper/logs");

    Ok(())
}

/// Runs the scheduler until SIGINT or SIGTERM.
async fn run_foreground(cli: &Cli) -> Result<()> {
    let _log_guard = match tracing_config::init_with_file() {
        Ok(guard) => Some(guard),
        Err(e) => {
            tracing_config::init_launcher()?;
            warn!(error = %e, "File logging unavailable, logging to stderr only");
            None
        }
    };
    let _span = span!(Level::INFO, "autowallpaper").entered();

    let config = resolve_config(cli)?;
    println!("{}", format_header("Starting automatic wallpaper changer..."));
    println!("{}", format_config(&config));

    let (trigger, shutdown) = lifecycle::shutdown_channel();
    let scheduler = TimeWindowScheduler::new(config, DesktopApplier::new());
    let mut task = tokio::spawn(scheduler.run(shutdown));

    tokio::select! {
        result = lifecycle::wait_for_interrupt() => result?,
        _ = &mut task => {
            warn!("Scheduler exited on its own");
            return Ok(());
        }
    }

    info!("Shutdown requested");
    trigger.trigger();
    if let Err(e) = task.await {
        error!(error = %e, "Scheduler task failed during shutdown");
    }

    println!("{}", format_success("Stopping the wallpaper changer."));
    Ok(())
}

/// Combines flags, the stored record and terminal prompts, and saves
/// newly supplied configurations.
fn resolve_config(cli: &Cli) -> Result<WallpaperConfig> {
    let store = ConfigStore::at_default_location()?;
    let stored = if cli.reset { None } else { store.load() };

    let mut terminal = TerminalAcquisition::from_terminal();
    let acquire = terminal.as_mut().map(|t| t as &mut dyn Acquire);

    let resolved = ConfigResolver::new(cli.overrides(), stored, cli.reset).resolve(acquire)?;

    if cli.persists(resolved.source) {
        if let Err(e) = store.save(&resolved.config) {
            error!(error = %e, "Configuration not saved, it will not survive a restart");
        }
    }

    Ok(resolved.config)
}
