//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use crate::advisory::{ChatMessage, ImageAttachment};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use techcompare_core::{
    Build, BuildSummary, Laptop, LaptopComparison, LaptopFilter, Part, TechCompareError,
    calculate_ppi, ppi_chart_value,
};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Catalog and session status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub laptop_count: usize,
    pub part_count: usize,
    pub brands: Vec<String>,
    pub selection: Vec<String>,
    pub active_build: String,
    pub advisory_configured: bool,
}

// =============================================================================
// LAPTOPS
// =============================================================================

/// A laptop with its price-performance index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaptopView {
    #[serde(flatten)]
    pub laptop: Laptop,
    pub ppi: f64,
    /// PPI capped to the chart axis.
    pub chart_ppi: f64,
}

impl From<&Laptop> for LaptopView {
    fn from(laptop: &Laptop) -> Self {
        Self {
            ppi: calculate_ppi(laptop),
            chart_ppi: ppi_chart_value(laptop),
            laptop: laptop.clone(),
        }
    }
}

/// Laptop search request: filter criteria plus an optional PPI ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub filter: LaptopFilter,
    /// Order results by PPI, best first, instead of catalog order.
    #[serde(default)]
    pub rank: bool,
}

/// Query string of `GET /parts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartsQuery {
    pub category: Option<String>,
}

// =============================================================================
// BUILDS
// =============================================================================

/// A stored build and its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildView {
    pub build: Build,
    pub summary: BuildSummary,
}

/// Slot assignment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    pub part_id: String,
}

/// Result of a slot mutation: the new summary plus the part that left the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub summary: BuildSummary,
    pub replaced: Option<Part>,
}

/// Ad-hoc build evaluation request. Nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub parts: Vec<Part>,
}

impl EvaluateRequest {
    /// Assemble the build; later parts overwrite earlier ones of the same category.
    #[must_use]
    pub fn to_build(&self) -> Build {
        Build::with_parts(
            "adhoc",
            self.name.clone().unwrap_or_else(|| "Ad-hoc build".to_string()),
            self.parts.iter().cloned(),
        )
    }
}

/// Prose advisory text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Comparison tray toggle request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub laptop_id: String,
}

/// Comparison tray state after a toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// Whether the toggled laptop is now selected.
    pub selected: bool,
    pub ids: Vec<String>,
}

/// Laptop comparison request. Without ids the current tray is compared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub advise: bool,
}

/// Comparison table plus optional advisory text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub comparison: LaptopComparison,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

// =============================================================================
// CHAT
// =============================================================================

/// Chat request: the conversation so far, last message last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub image: Option<ImageAttachment>,
    /// Extra context merged into the consultant's instructions.
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

// =============================================================================
// IMPORT
// =============================================================================

/// Import through the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportUrlsRequest {
    pub urls: Vec<String>,
}

/// Offline import of collaborator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecordsRequest {
    pub records: Vec<Value>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error rendered as a status code plus `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// HTTP status for a core error.
#[must_use]
pub fn status_for(error: &TechCompareError) -> StatusCode {
    match error {
        TechCompareError::PartNotFound(_)
        | TechCompareError::LaptopNotFound(_)
        | TechCompareError::BuildNotFound(_) => StatusCode::NOT_FOUND,
        TechCompareError::Validation(_) | TechCompareError::InvalidCategory(_) => {
            StatusCode::BAD_REQUEST
        }
        TechCompareError::SelectionFull(_) => StatusCode::CONFLICT,
        TechCompareError::SerializationError(_) | TechCompareError::IoError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TechCompareError> for ApiError {
    fn from(error: TechCompareError) -> Self {
        Self {
            status: status_for(&error),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
