use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the flat-file court store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize courts: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of an external automation script.
///
/// The messages never carry the child's stdout/stderr; those are logged
/// by the runner and stay on the server.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Command failed: `{command}` exited with code {code}")]
    Failed { command: String, code: i32 },
    #[error("Command failed: `{command}` was terminated by signal {signal}")]
    Signalled { command: String, signal: i32 },
    #[error("Command failed: `{command}` terminated without an exit code")]
    Terminated { command: String },
    #[error("{task} is already running")]
    Busy { task: &'static str },
    #[error("{task} did not complete: {reason}")]
    Aborted { task: &'static str, reason: String },
}

impl ScriptError {
    pub fn is_busy(&self) -> bool {
        matches!(self, ScriptError::Busy { .. })
    }
}

/// Context for failures talking to a running server
pub fn request_context(url: &str) -> String {
    format!("Failed to send request to: {}", url)
}

/// Context for store failures surfaced by the CLI
pub fn store_context(operation: &str, path: &std::path::Path) -> String {
    format!("Failed to {} courts at {}", operation, path.display())
}
