//! # Advisory Module
//!
//! Client side of the generation collaborator: prose comparison summaries,
//! build reviews, conversational chat and batch extraction of laptop records
//! from product URLs.
//!
//! Collaborator failures never reach users raw. [`service`] substitutes a
//! fixed fallback for every operation, and extracted records only enter the
//! catalog after core validation.

pub mod client;
pub mod prompts;
pub mod service;

pub use client::AdvisoryClient;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors from the advisory client layer.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// No collaborator URL is configured.
    #[error("Advisory collaborator is not configured")]
    NotConfigured,

    /// Cannot reach the collaborator.
    #[error("Cannot connect to advisory collaborator at {0}")]
    ConnectionFailed(String),

    /// 401 Unauthorized - invalid or missing API key.
    #[error("Unauthorized: invalid or missing advisory API key")]
    Unauthorized,

    /// 429 Too Many Requests.
    #[error("Rate limited: too many advisory requests")]
    RateLimited,

    /// The collaborator returned an error status.
    #[error("Advisory server error ({0}): {1}")]
    ServerError(u16, String),

    /// The response body could not be parsed.
    #[error("Advisory parse error: {0}")]
    ParseError(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }
}

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

/// Inline image attached to the latest chat turn, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub data: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

impl ImageAttachment {
    /// Accept bare base64 or a `data:<mime>;base64,<payload>` URL.
    ///
    /// The payload must decode as standard base64 and the mime type must be
    /// an image type.
    pub fn normalized(self) -> Result<Self, String> {
        let (mime_type, data) = match self.data.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| "malformed data URL".to_string())?;
                let mime = header.strip_suffix(";base64").unwrap_or(header);
                (mime.to_string(), payload.to_string())
            }
            None => (self.mime_type, self.data),
        };

        if !mime_type.starts_with("image/") {
            return Err(format!("unsupported attachment type: {mime_type}"));
        }
        if data.is_empty() {
            return Err("empty image attachment".to_string());
        }
        STANDARD
            .decode(data.as_bytes())
            .map_err(|e| format!("image attachment is not valid base64: {e}"))?;

        Ok(Self { data, mime_type })
    }
}

/// Requested shape of the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

/// One generation job, without the model name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryPrompt {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    pub temperature: f64,
    #[serde(default)]
    pub response_format: ResponseFormat,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_is_split_into_mime_and_payload() {
        let image = ImageAttachment {
            data: "data:image/png;base64,aGVsbG8=".to_string(),
            mime_type: default_mime_type(),
        }
        .normalized()
        .expect("valid data url");

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result = ImageAttachment {
            data: "not base64!".to_string(),
            mime_type: default_mime_type(),
        }
        .normalized();
        assert!(result.is_err());
    }

    #[test]
    fn non_image_type_is_rejected() {
        let result = ImageAttachment {
            data: "data:text/plain;base64,aGVsbG8=".to_string(),
            mime_type: default_mime_type(),
        }
        .normalized();
        assert!(result.is_err());
    }

    #[test]
    fn chat_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).expect("serialize");
        assert_eq!(json, r#"{"role":"user","text":"hi"}"#);
    }
}
