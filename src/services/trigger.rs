use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::automation::{AutomationService, AutomationTask};
use crate::config::settings::TriggerSettings;
use crate::errors::ScriptError;

/// What the timer loop needs from the automation layer
pub trait Trigger: Send + Sync + 'static {
    fn fire(&self, task: AutomationTask) -> impl Future<Output = Result<(), ScriptError>> + Send;
}

impl Trigger for AutomationService {
    async fn fire(&self, task: AutomationTask) -> Result<(), ScriptError> {
        self.run(task).await.map(|_| ())
    }
}

/// Background loops started once the server is listening
pub struct TriggerLoops {
    handles: Vec<JoinHandle<()>>,
}

impl TriggerLoops {
    /// Fire score recognition, then scheduling, right away and then every
    /// configured interval. Each task gets its own loop; a loop waits for its
    /// own run to finish and skips the ticks it missed meanwhile.
    pub fn spawn<T: Trigger>(trigger: Arc<T>, settings: &TriggerSettings) -> Self {
        let handles = vec![
            tokio::spawn(run_every(
                Arc::clone(&trigger),
                AutomationTask::ScoreRecognition,
                settings.score_interval,
            )),
            tokio::spawn(run_every(
                trigger,
                AutomationTask::Scheduling,
                settings.schedule_interval,
            )),
        ];

        info!(
            "Score recognition runs every {}s, scheduling every {}s",
            settings.score_interval.as_secs(),
            settings.schedule_interval.as_secs()
        );
        Self { handles }
    }

    pub fn abort(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

async fn run_every<T: Trigger>(trigger: Arc<T>, task: AutomationTask, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        fire_once(trigger.as_ref(), task).await;
    }
}

async fn fire_once<T: Trigger>(trigger: &T, task: AutomationTask) {
    info!("Triggering {}...", task.label());
    match trigger.fire(task).await {
        Ok(()) => info!("{} trigger completed", task.label()),
        Err(e) if e.is_busy() => warn!("Skipping tick: {}", e),
        Err(e) => error!("{} trigger failed: {}", task.label(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTrigger {
        calls: Mutex<Vec<AutomationTask>>,
        fail_with_busy: bool,
    }

    impl RecordingTrigger {
        fn count(&self, task: AutomationTask) -> usize {
            self.calls.lock().unwrap().iter().filter(|t| **t == task).count()
        }
    }

    impl Trigger for RecordingTrigger {
        async fn fire(&self, task: AutomationTask) -> Result<(), ScriptError> {
            self.calls.lock().unwrap().push(task);
            if self.fail_with_busy {
                return Err(ScriptError::Busy { task: task.label() });
            }
            Ok(())
        }
    }

    fn every_ten_seconds() -> TriggerSettings {
        TriggerSettings {
            enabled: true,
            score_interval: Duration::from_secs(10),
            schedule_interval: Duration::from_secs(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_immediately_then_every_interval() {
        let trigger = Arc::new(RecordingTrigger::default());
        let loops = TriggerLoops::spawn(Arc::clone(&trigger), &every_ten_seconds());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(trigger.count(AutomationTask::ScoreRecognition), 1);
        assert_eq!(trigger.count(AutomationTask::Scheduling), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(trigger.count(AutomationTask::ScoreRecognition), 3);
        assert_eq!(trigger.count(AutomationTask::Scheduling), 3);

        loops.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_do_not_stop_the_loop() {
        let trigger = Arc::new(RecordingTrigger {
            fail_with_busy: true,
            ..Default::default()
        });
        let loops = TriggerLoops::spawn(Arc::clone(&trigger), &every_ten_seconds());

        tokio::time::sleep(Duration::from_secs(31)).await;

        assert_eq!(trigger.count(AutomationTask::ScoreRecognition), 4);
        loops.abort();
    }
}
