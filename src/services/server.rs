use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::services::trigger::TriggerLoops;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("[OK] Server running at http://localhost:{}", self.port);

        serve(listener, self.config).await
    }
}

/// Serve on an already bound listener; trigger loops start here, after bind
pub async fn serve(listener: TcpListener, config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config));
    info!("Court data file: {}", state.store.path().display());

    let triggers = if state.config.triggers.enabled {
        info!("Server is up, triggering all automation now");
        Some(TriggerLoops::spawn(Arc::clone(&state.automation), &state.config.triggers))
    } else {
        info!("Automatic triggers disabled");
        None
    };

    let app = create_router(state).layer(CorsLayer::permissive());
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error");

    if let Some(triggers) = triggers {
        triggers.abort();
    }
    result
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            log::warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
