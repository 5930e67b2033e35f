/// Mode argument the score recognizer expects for "scan every court"
pub const SCORE_MODE_ALL: &str = "all";

/// An external program plus its fixed argument list
///
/// The score recognizer is invoked as `<python> recognize_score.py all`,
/// the scheduler as `<python> schedule_manager.py`. Both run with the
/// scripts directory as working directory and communicate only through
/// the court file and their exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ScriptCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Human readable command line, used in logs
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, self.args.join(" "))
    }
}

pub fn default_score_command(interpreter: &str, script: &str) -> ScriptCommand {
    ScriptCommand::new(interpreter, &[script, SCORE_MODE_ALL])
}

pub fn default_schedule_command(interpreter: &str, script: &str) -> ScriptCommand {
    ScriptCommand::new(interpreter, &[script])
}
