pub mod scripts;
pub mod settings;

pub use scripts::ScriptCommand;
pub use settings::AppConfig;
