pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod report;
pub mod services;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;
use std::time::Duration;

use crate::cli::{Action, Command};
use crate::config::settings::AppConfig;
use crate::errors::store_context;
use crate::http::ServerClient;
use crate::services::server::ServerService;
use crate::store::CourtStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, interval_secs: u64, no_triggers: bool) -> Result<()> {
    let mut config = AppConfig::from_env();
    config.triggers.enabled = !no_triggers;
    config.triggers.score_interval = Duration::from_secs(interval_secs.max(1));
    config.triggers.schedule_interval = Duration::from_secs(interval_secs.max(1));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init(courts: usize) -> Result<()> {
    let mut config = AppConfig::from_env();
    config.store.court_count = courts;
    let store = CourtStore::from_settings(&config.store);

    let collection = store
        .reset()
        .with_context(|| store_context("initialize", store.path()))?;
    info!("{} now holds {} blank courts", store.path().display(), collection.len());
    Ok(())
}

pub fn handle_show() -> Result<()> {
    let config = AppConfig::from_env();
    let store = CourtStore::from_settings(&config.store);

    let collection = store
        .try_load()
        .with_context(|| store_context("read", store.path()))?;
    println!("{}", report::format_courts(&collection));
    Ok(())
}

pub fn handle_trigger(action: Action, url: &str, timeout_secs: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = ServerClient::new(url, timeout_secs)?;
        info!("Requesting {} from {}", action.task().label(), client.url(action.path()));

        let (status, body) = client.post(action.path()).await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        if !status.is_success() {
            anyhow::bail!("{} failed with HTTP {}", action.task().label(), status);
        }
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
