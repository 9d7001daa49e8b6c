//! HTTP client for the local Ollama generate endpoint.
//!
//! One POST per call, bounded by a fixed client timeout. No retries:
//! every failure is mapped into the `AppError` taxonomy and handled at
//! the handler boundary.

use crate::config::OllamaSettings;
use crate::error::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OllamaClient {
    client: Client,
    settings: OllamaSettings,
}

impl OllamaClient {
    pub fn new(settings: OllamaSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }

    /// Send a prompt to the inference service and return the generated text.
    ///
    /// An empty `response` string is a valid success value, distinct from
    /// a missing `response` field (which is an upstream protocol fault).
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let body = GenerateRequest {
            model: &self.settings.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.settings.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to send generate request to {}: {}",
                    self.settings.url,
                    e
                );
                AppError::InternalError(anyhow::anyhow!("Inference request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                detail = %detail,
                "Inference service returned an error status"
            );
            return Err(AppError::UpstreamStatus { status, detail });
        }

        let payload: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode inference response body: {}", e);
            AppError::InternalError(anyhow::anyhow!("Malformed inference response: {}", e))
        })?;

        match payload.response {
            Some(text) => Ok(text),
            None => {
                tracing::error!("Inference response body is missing the `response` field");
                Err(AppError::UpstreamProtocol(
                    "response body is missing the `response` field".to_string(),
                ))
            }
        }
    }
}

/// Request body for the generate endpoint. Streaming is always disabled;
/// the relay returns one complete completion per call.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}
