//! Blocking client for an OpenAI-compatible images endpoint.
//!
//! Request: `POST {endpoint}` with bearer auth and
//! `{"model", "prompt", "size", "n": 1}`.
//! Response: `{"data": [{"b64_json": "..."}]}`; only the first entry is used.

use super::{ImageFailure, ImageGenerator};
use crate::config::{ApiKey, ImageSettings};
use crate::error::{AutoconceptError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u8,
    /// Older models default to URLs; `gpt-image-*` models always return
    /// base64 and reject the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Image generator backed by the OpenAI images API.
pub struct OpenAiImageClient {
    http: reqwest::blocking::Client,
    api_key: ApiKey,
    endpoint: String,
    model: String,
    size: String,
}

impl OpenAiImageClient {
    pub fn new(settings: &ImageSettings, api_key: ApiKey) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                AutoconceptError::ConfigError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_key,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            size: settings.size.clone(),
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> GenerationRequest<'a> {
        GenerationRequest {
            model: &self.model,
            prompt,
            size: &self.size,
            n: 1,
            response_format: (!self.model.starts_with("gpt-image")).then_some("b64_json"),
        }
    }
}

impl ImageGenerator for OpenAiImageClient {
    fn generate(&self, prompt: &str) -> std::result::Result<Vec<u8>, ImageFailure> {
        debug!(model = %self.model, size = %self.size, "requesting image");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&self.request(prompt))
            .send()
            .map_err(|e| ImageFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ImageFailure::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ImageFailure::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_generation_response(&body)
    }
}

/// Decode the first image of a generation response body.
pub fn parse_generation_response(body: &str) -> std::result::Result<Vec<u8>, ImageFailure> {
    let response: GenerationResponse =
        serde_json::from_str(body).map_err(|e| ImageFailure::Payload(e.to_string()))?;

    let encoded = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ImageFailure::Payload("response contained no images".to_string()))?
        .b64_json
        .ok_or_else(|| ImageFailure::Payload("image entry has no b64_json field".to_string()))?;

    STANDARD
        .decode(encoded.trim())
        .map_err(|e| ImageFailure::Decode(e.to_string()))
}

/// Pull `error.message` out of an error body, or fall back to a truncated
/// copy of the raw text.
fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(200).collect()
}
