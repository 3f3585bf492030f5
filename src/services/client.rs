//! HTTP client service
//!
//! Encapsulates HTTP communication with the completion provider

use crate::config::Settings;
use crate::models::openai::{CompletionRequest, CompletionResponse};
use crate::utils::error::AppError;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Completion provider client
///
/// Constructed once at startup and shared via application state; never
/// rebuilt per request.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
}

impl CompletionClient {
    /// Create a new client instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.openai.timeout))
            .user_agent(concat!("captiongen/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.openai.base_url.clone(),
        })
    }

    /// Send a completion request
    ///
    /// Provider-side errors carry the provider's status code and payload;
    /// transport and parse failures become `AppError::Upstream` with the
    /// detail kept server-side.
    pub async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, AppError> {
        debug!("Sending completion request for model: {}", request.model);

        let url = format!("{}/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to send completion request: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            let completion: CompletionResponse = response.json().await.map_err(|e| {
                AppError::Upstream(format!("Failed to parse completion response: {}", e))
            })?;

            debug!("Completion request completed successfully");
            Ok(completion)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Provider request failed: {} - {}", status, body);

            // Forward the provider's payload unchanged when it is JSON;
            // otherwise wrap the raw text in the standard error shape
            let payload = serde_json::from_str::<serde_json::Value>(&body).unwrap_or_else(|_| {
                serde_json::json!({ "error": { "message": body } })
            });

            Err(AppError::Provider {
                status: status.as_u16(),
                payload,
            })
        }
    }
}
