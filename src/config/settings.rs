use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::scripts::{ScriptCommand, default_schedule_command, default_score_command};

/// Label every freshly initialized court starts with ("not started")
pub const DEFAULT_STATUS: &str = "尚未開始";
pub const DEFAULT_COURT_COUNT: usize = 12;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TRIGGER_INTERVAL_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub data_file: PathBuf,
    pub court_count: usize,
    pub default_status: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("courts.json"),
            court_count: DEFAULT_COURT_COUNT,
            default_status: DEFAULT_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScriptSettings {
    pub working_dir: PathBuf,
    pub score_recognition: ScriptCommand,
    pub scheduling: ScriptCommand,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            score_recognition: default_score_command("python", "recognize_score.py"),
            scheduling: default_schedule_command("python", "schedule_manager.py"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TriggerSettings {
    pub enabled: bool,
    pub score_interval: Duration,
    pub schedule_interval: Duration,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            score_interval: Duration::from_secs(DEFAULT_TRIGGER_INTERVAL_SECS),
            schedule_interval: Duration::from_secs(DEFAULT_TRIGGER_INTERVAL_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub public_dir: PathBuf,
    pub viewer_page: &'static str,
    pub admin_page: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            viewer_page: "viewer.html",
            admin_page: "admin.html",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub scripts: ScriptSettings,
    pub triggers: TriggerSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `COURTS_FILE`, `PUBLIC_DIR`, `SCRIPTS_DIR`,
    /// `PYTHON`, `SCORE_SCRIPT` and `SCHEDULE_SCRIPT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("COURTS_FILE") {
            config.store.data_file = PathBuf::from(path);
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            config.server.public_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("SCRIPTS_DIR") {
            config.scripts.working_dir = PathBuf::from(dir);
        }

        let python = lookup("PYTHON").unwrap_or_else(|| "python".to_string());
        let score_script =
            lookup("SCORE_SCRIPT").unwrap_or_else(|| "recognize_score.py".to_string());
        let schedule_script =
            lookup("SCHEDULE_SCRIPT").unwrap_or_else(|| "schedule_manager.py".to_string());
        config.scripts.score_recognition = default_score_command(&python, &score_script);
        config.scripts.scheduling = default_schedule_command(&python, &schedule_script);

        config
    }

    pub fn public_path(&self, page: &str) -> PathBuf {
        self.server.public_dir.join(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_tournament_setup() {
        let config = AppConfig::new();

        assert_eq!(config.store.court_count, 12);
        assert_eq!(config.store.data_file, PathBuf::from("courts.json"));
        assert_eq!(config.triggers.score_interval, Duration::from_secs(10));
        assert_eq!(config.triggers.schedule_interval, Duration::from_secs(10));
        assert_eq!(config.scripts.score_recognition.args, vec!["recognize_score.py", "all"]);
        assert_eq!(config.scripts.scheduling.args, vec!["schedule_manager.py"]);
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("COURTS_FILE", "/tmp/courts.json"),
            ("PUBLIC_DIR", "/srv/www"),
            ("PYTHON", "python3"),
            ("SCHEDULE_SCRIPT", "sched.py"),
        ]);

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.data_file, PathBuf::from("/tmp/courts.json"));
        assert_eq!(config.public_path("admin.html"), PathBuf::from("/srv/www/admin.html"));
        assert_eq!(config.scripts.score_recognition.program, "python3");
        assert_eq!(config.scripts.scheduling.args, vec!["sched.py"]);
        assert_eq!(config.scripts.working_dir, PathBuf::from("."));
    }
}
