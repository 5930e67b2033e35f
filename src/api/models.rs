use serde::{Deserialize, Serialize};

/// Body returned when an action endpoint's script exited cleanly
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
}

/// Body returned when an action endpoint's script could not run or failed
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}
