use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::errors::request_context;

/// Talks to a running coordination server the way the admin page does
pub struct ServerClient {
    client: Client,
    base_url: String,
}

impl ServerClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(timeout_secs)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST an action endpoint; returns the status and the JSON body (if any)
    pub async fn post(&self, path: &str) -> Result<(StatusCode, Value)> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| request_context(&url))?;

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(concat!("court_coordinator/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
