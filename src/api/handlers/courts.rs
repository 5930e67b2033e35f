use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use super::AppState;

/// Every court exactly as persisted
pub async fn get_courts(State(state): State<Arc<AppState>>) -> Response {
    match tokio::task::spawn_blocking(move || state.store.load()).await {
        Ok(courts) => Json(courts).into_response(),
        Err(e) => {
            error!("Loading courts did not complete: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load courts").into_response()
        }
    }
}
