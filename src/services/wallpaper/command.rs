use std::{ffi::OsStr, process::Stdio, time::Duration};

use tokio::{process::Command, time::timeout};
use tracing::{debug, instrument};

use super::ApplyError;

/// Runs an external program and returns its standard output.
///
/// The child is killed if it outlives `limit`.
#[instrument(skip(args))]
pub(crate) async fn run<I, S>(program: &str, args: I, limit: Duration) -> Result<String, ApplyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match timeout(limit, command.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(ApplyError::CommandUnavailable {
                program: program.to_string(),
                details: e.to_string(),
            });
        }
        Err(_) => {
            return Err(ApplyError::Timeout {
                program: program.to_string(),
                timeout: limit,
            });
        }
    };

    if !output.status.success() {
        return Err(ApplyError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    debug!("Command succeeded");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
