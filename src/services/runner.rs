use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::config::ScriptCommand;
use crate::errors::ScriptError;

/// Captured output of a script that exited cleanly
#[derive(Debug, Clone, Default)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external scripts to completion and logs whatever they print
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    working_dir: PathBuf,
}

impl ScriptRunner {
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Spawn the command and wait for it. No timeout is applied.
    pub async fn run(
        &self,
        label: &str,
        command: &ScriptCommand,
    ) -> Result<ScriptOutput, ScriptError> {
        let display = command.display();
        info!("{}: running `{}`", label, display);

        let output = self
            .build_command(command)
            .output()
            .await
            .map_err(|source| {
                error!("{}: failed to start `{}`: {}", label, display, source);
                ScriptError::Spawn {
                    command: display.clone(),
                    source,
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            log_output(label, &stdout, &stderr);
            return Ok(ScriptOutput { stdout, stderr });
        }

        let err = status_error(display, output.status);
        error!("{}: {}", label, err);
        if !stdout.is_empty() {
            error!("{} stdout:\n{}", label, stdout);
        }
        if !stderr.is_empty() {
            error!("{} stderr:\n{}", label, stderr);
        }
        Err(err)
    }

    fn build_command(&self, command: &ScriptCommand) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

fn log_output(label: &str, stdout: &str, stderr: &str) {
    if !stdout.is_empty() {
        info!("{} stdout:\n{}", label, stdout);
    }
    if !stderr.is_empty() {
        info!("{} stderr:\n{}", label, stderr);
    }
}

fn status_error(command: String, status: ExitStatus) -> ScriptError {
    if let Some(code) = status.code() {
        return ScriptError::Failed { command, code };
    }
    match signal_of(status) {
        Some(signal) => ScriptError::Signalled { command, signal },
        None => ScriptError::Terminated { command },
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}
