use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::settings::{DEFAULT_COURT_COUNT, DEFAULT_PORT, DEFAULT_TRIGGER_INTERVAL_SECS};
use crate::services::automation::AutomationTask;

#[derive(Parser, Debug)]
#[command(author, version, about = "multi-court tournament coordination server")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the coordination server
    Serve {
        /// Port number (defaults to $PORT, then 3000)
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Seconds between automatic score recognition / scheduling runs
        #[arg(short, long, default_value_t = DEFAULT_TRIGGER_INTERVAL_SECS)]
        interval_secs: u64,
        /// Only serve requests, never run the scripts on a timer
        #[arg(long)]
        no_triggers: bool,
    },
    /// Reset the court file to blank courts
    Init {
        /// Number of courts to create
        #[arg(short, long, default_value_t = DEFAULT_COURT_COUNT)]
        courts: usize,
    },
    /// Print the courts currently on disk
    Show,
    /// Ask a running server to run one of the automation scripts
    Trigger {
        /// Which script to run
        #[arg(value_enum)]
        action: Action,
        /// Base URL of the running server
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
        /// Give up waiting for the server after this many seconds
        #[arg(short, long, default_value_t = 600)]
        timeout_secs: u64,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// POST /update-score/all
    Scores,
    /// POST /assign-next
    Schedule,
}

impl Action {
    pub fn path(self) -> &'static str {
        match self {
            Action::Scores => "/update-score/all",
            Action::Schedule => "/assign-next",
        }
    }

    pub fn task(self) -> AutomationTask {
        match self {
            Action::Scores => AutomationTask::ScoreRecognition,
            Action::Schedule => AutomationTask::Scheduling,
        }
    }
}
