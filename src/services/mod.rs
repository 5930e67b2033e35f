pub mod automation;
pub mod runner;
pub mod server;
pub mod trigger;
