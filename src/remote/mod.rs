//! Blocking HTTP client for the backend RAG endpoints
//!
//! The CLI only reports what the backend returned, so non-2xx statuses
//! are not errors here. Only transport and decode failures are `Err`;
//! the caller decides whether those are fatal.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::Config;

/// Blocking client for the RAG API
#[derive(Debug, Clone)]
pub struct RagClient {
    client: Client,
    server_url: String,
}

impl RagClient {
    /// Create a client from config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server_url, config.http_timeout())
    }

    /// Create a client with explicit parameters
    pub fn new(server_url: &str, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn test_endpoint(&self) -> String {
        format!("{}/api/rag/test", self.server_url)
    }

    /// GET /api/rag/test
    pub fn test(&self) -> Result<(StatusCode, serde_json::Value)> {
        let response = self
            .client
            .get(self.test_endpoint())
            .send()
            .context("Failed to reach RAG test endpoint")?;

        let status = response.status();
        let body = response.json().context("Failed to parse response")?;
        Ok((status, body))
    }

    /// POST /api/rag/ask with a question
    pub fn ask(&self, question: &str) -> Result<(StatusCode, serde_json::Value)> {
        let url = format!("{}/api/rag/ask", self.server_url);
        let payload = serde_json::json!({ "question": question });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .context("Failed to reach RAG ask endpoint")?;

        let status = response.status();
        let body = response.json().context("Failed to parse response")?;
        Ok((status, body))
    }
}
