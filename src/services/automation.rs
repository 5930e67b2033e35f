use log::warn;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::runner::{ScriptOutput, ScriptRunner};
use crate::config::ScriptCommand;
use crate::config::settings::ScriptSettings;
use crate::errors::ScriptError;

/// The two external jobs this server drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomationTask {
    ScoreRecognition,
    Scheduling,
}

impl AutomationTask {
    pub fn label(self) -> &'static str {
        match self {
            AutomationTask::ScoreRecognition => "Score recognition",
            AutomationTask::Scheduling => "Scheduling",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AutomationTask::ScoreRecognition => {
                "[OK] Score recognition finished and courts were updated."
            }
            AutomationTask::Scheduling => "[OK] Next players have been assigned.",
        }
    }

    pub fn failure_summary(self) -> &'static str {
        match self {
            AutomationTask::ScoreRecognition => "Score recognition script failed to start or run",
            AutomationTask::Scheduling => "Scheduling failed",
        }
    }
}

/// Runs the score recognizer and the scheduler, at most one run of each
/// at a time.
pub struct AutomationService {
    runner: ScriptRunner,
    score_recognition: ScriptCommand,
    scheduling: ScriptCommand,
    score_running: Arc<AtomicBool>,
    schedule_running: Arc<AtomicBool>,
}

impl AutomationService {
    pub fn new(settings: &ScriptSettings) -> Self {
        Self {
            runner: ScriptRunner::new(&settings.working_dir),
            score_recognition: settings.score_recognition.clone(),
            scheduling: settings.scheduling.clone(),
            score_running: Arc::new(AtomicBool::new(false)),
            schedule_running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run `task` to completion.
    ///
    /// Fails with [`ScriptError::Busy`] if the same task is still running.
    /// The child is driven on its own tokio task, so a caller that goes away
    /// (a dropped HTTP request) does not release the in-flight flag early.
    pub async fn run(&self, task: AutomationTask) -> Result<ScriptOutput, ScriptError> {
        let guard = InFlightGuard::acquire(self.flag(task)).ok_or_else(|| {
            warn!("{} requested while a previous run is still in flight", task.label());
            ScriptError::Busy { task: task.label() }
        })?;

        let runner = self.runner.clone();
        let command = self.command(task).clone();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            runner.run(task.label(), &command).await
        });

        handle.await.unwrap_or_else(|e| {
            Err(ScriptError::Aborted {
                task: task.label(),
                reason: e.to_string(),
            })
        })
    }

    pub fn is_running(&self, task: AutomationTask) -> bool {
        self.flag(task).load(Ordering::Acquire)
    }

    fn command(&self, task: AutomationTask) -> &ScriptCommand {
        match task {
            AutomationTask::ScoreRecognition => &self.score_recognition,
            AutomationTask::Scheduling => &self.scheduling,
        }
    }

    fn flag(&self, task: AutomationTask) -> &Arc<AtomicBool> {
        match task {
            AutomationTask::ScoreRecognition => &self.score_running,
            AutomationTask::Scheduling => &self.schedule_running,
        }
    }
}

/// Holds a task's in-flight flag; clears it on drop
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag: Arc::clone(flag) })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
