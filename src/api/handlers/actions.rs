use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::info;
use std::sync::Arc;

use super::AppState;
use crate::api::models::{ActionResponse, ErrorResponse};
use crate::errors::ScriptError;
use crate::services::automation::AutomationTask;

/// Run score recognition over all courts. The request body is ignored.
pub async fn update_scores(State(state): State<Arc<AppState>>) -> Response {
    run_action(&state, AutomationTask::ScoreRecognition).await
}

/// Run the scheduler to fill free courts. The request body is ignored.
pub async fn assign_next(State(state): State<Arc<AppState>>) -> Response {
    run_action(&state, AutomationTask::Scheduling).await
}

async fn run_action(state: &AppState, task: AutomationTask) -> Response {
    info!("{} requested over HTTP", task.label());
    match state.automation.run(task).await {
        Ok(_) => Json(ActionResponse {
            message: task.success_message().to_string(),
        })
        .into_response(),
        Err(e) => failure_response(task, &e),
    }
}

fn failure_response(task: AutomationTask, err: &ScriptError) -> Response {
    let status = if err.is_busy() {
        StatusCode::CONFLICT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let body = ErrorResponse {
        error: task.failure_summary().to_string(),
        details: err.to_string(),
    };
    (status, Json(body)).into_response()
}
