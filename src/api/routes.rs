use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers::{
    AppState,
    actions::{assign_next, update_scores},
    courts::get_courts,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;
    let viewer = ServeFile::new(state.config.public_path(server.viewer_page));
    let admin = ServeFile::new(state.config.public_path(server.admin_page));
    let assets = ServeDir::new(&server.public_dir);

    Router::new()
        .route("/courts", get(get_courts))
        .route("/update-score/all", post(update_scores))
        .route("/assign-next", post(assign_next))
        .route_service("/", viewer)
        .route_service("/admin", admin)
        .fallback_service(assets)
        .with_state(state)
}
