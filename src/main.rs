use anyhow::Result;

use court_coordinator::cli::Command;
use court_coordinator::{
    handle_completions, handle_init, handle_serve, handle_show, handle_trigger, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve {
            port,
            interval_secs,
            no_triggers,
        } => handle_serve(*port, *interval_secs, *no_triggers),
        Command::Init { courts } => handle_init(*courts),
        Command::Show => handle_show(),
        Command::Trigger {
            action,
            url,
            timeout_secs,
        } => handle_trigger(*action, url, *timeout_secs),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
