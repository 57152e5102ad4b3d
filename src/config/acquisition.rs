use std::{
    io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write},
    path::PathBuf,
};

use thiserror::Error;
use tracing::{debug, instrument};

use super::{WallpaperConfig, is_blank};

/// Errors raised while collecting a configuration from the user.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    /// The input stream ended before a complete record was entered
    #[error("input closed before configuration was complete")]
    Closed,

    /// Reading or writing the prompt failed
    #[error("IO error during acquisition: {0}")]
    Io(#[from] io::Error),
}

/// Interactive source of a complete configuration.
///
/// Implementations must only return once every field is valid; invalid
/// input is rejected and asked for again.
pub trait Acquire {
    /// Collects a complete configuration.
    ///
    /// # Errors
    /// Returns `AcquisitionError::Closed` if the user input ends early.
    fn acquire(&mut self) -> Result<WallpaperConfig, AcquisitionError>;
}

/// Line-based prompt acquisition on a terminal.
pub struct TerminalAcquisition<R, W> {
    input: R,
    output: W,
}

impl TerminalAcquisition<StdinLock<'static>, Stdout> {
    /// Prompts on the process terminal, or `None` when stdin is not a TTY.
    pub fn from_terminal() -> Option<Self> {
        let stdin: Stdin = io::stdin();
        if !stdin.is_terminal() {
            debug!("stdin is not a terminal, interactive acquisition disabled");
            return None;
        }

        Some(Self::new(stdin.lock(), io::stdout()))
    }
}

impl<R: BufRead, W: Write> TerminalAcquisition<R, W> {
    /// Creates an acquisition reading answers from `input` and writing
    /// prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, AcquisitionError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AcquisitionError::Closed);
        }

        Ok(line.trim().to_string())
    }

    fn ask_path(&mut self, window: &str) -> Result<PathBuf, AcquisitionError> {
        loop {
            let answer = self.read_answer(&format!("Path to the {window} wallpaper"))?;
            let path = PathBuf::from(&answer);

            if is_blank(&path) {
                writeln!(self.output, "A path is required.")?;
                continue;
            }
            if !path.is_file() {
                writeln!(
                    self.output,
                    "Note: '{answer}' does not exist yet, it will be checked again when applied."
                )?;
            }

            return Ok(path);
        }
    }

    fn ask_interval(&mut self) -> Result<u64, AcquisitionError> {
        loop {
            let answer = self.read_answer("Interval in minutes between changes")?;

            match answer.parse::<u64>() {
                Ok(minutes) if minutes >= 1 => return Ok(minutes),
                _ => writeln!(self.output, "Enter a whole number of minutes, at least 1.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Acquire for TerminalAcquisition<R, W> {
    #[instrument(skip(self))]
    fn acquire(&mut self) -> Result<WallpaperConfig, AcquisitionError> {
        writeln!(self.output, "No wallpaper configuration found, let's create one.")?;

        let morning = self.ask_path("morning")?;
        let afternoon = self.ask_path("afternoon")?;
        let evening = self.ask_path("evening")?;
        let interval_minutes = self.ask_interval()?;

        Ok(WallpaperConfig {
            morning,
            afternoon,
            evening,
            interval_minutes,
        })
    }
}
