//! # Advisory HTTP Client
//!
//! Wrapper around the collaborator's generation endpoint.
//!
//! `POST {url}/generate` with `{model, prompt, history?, system_instruction?,
//! temperature, response_format, tools?, image?}`, answered by `{"text": "..."}`.

use super::{AdvisoryError, AdvisoryPrompt, prompts};
use crate::config::AdvisoryConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Request body sent to the collaborator.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    #[serde(flatten)]
    prompt: &'a AdvisoryPrompt,
}

/// Response body returned by the collaborator.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    text: String,
}

/// HTTP client for the generation collaborator.
#[derive(Debug, Clone)]
pub struct AdvisoryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl AdvisoryClient {
    /// Build a client from configuration.
    ///
    /// Returns `NotConfigured` when no collaborator URL is set.
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        let base_url = config
            .url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .ok_or(AdvisoryError::NotConfigured)?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| AdvisoryError::ConnectionFailed(format!("{base_url}: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with optional Bearer auth.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Send a request and handle connection errors.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, AdvisoryError> {
        req.send()
            .await
            .map_err(|e| AdvisoryError::ConnectionFailed(format!("{}: {e}", self.base_url)))
    }

    /// Check status codes and decode the generation response.
    async fn handle_response(&self, resp: reqwest::Response) -> Result<String, AdvisoryError> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdvisoryError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AdvisoryError::RateLimited);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AdvisoryError::ServerError(status.as_u16(), body));
        }
        resp.json::<GenerateResponse>()
            .await
            .map(|r| r.text)
            .map_err(|e| AdvisoryError::ParseError(e.to_string()))
    }

    /// POST /generate → generated text. May be empty.
    pub async fn generate_advisory(&self, prompt: &AdvisoryPrompt) -> Result<String, AdvisoryError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
        };
        let req = self.request(reqwest::Method::POST, "/generate").json(&body);
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    /// Ask the collaborator to extract laptop records from product pages.
    ///
    /// The returned values are untrusted and unvalidated.
    pub async fn extract_structured_data(&self, urls: &[String]) -> Result<Vec<Value>, AdvisoryError> {
        let text = self.generate_advisory(&prompts::extraction(urls)).await?;
        parse_record_array(&text)
    }
}

/// Parse generated text as a JSON array of records.
///
/// An empty answer is an empty batch.
pub fn parse_record_array(text: &str) -> Result<Vec<Value>, AdvisoryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(other) => Err(AdvisoryError::ParseError(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(AdvisoryError::ParseError(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// TESTS
// =============================================================================
