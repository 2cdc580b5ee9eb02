//! Unit tests for API types serialization/deserialization.

#![allow(clippy::unwrap_used, clippy::panic)]

use serde_json::json;
use techcompare::advisory::ChatRole;
use techcompare::api::types::{
    ApiError, ChatRequest, CompareRequest, CompareResponse, EvaluateRequest, HealthResponse,
    LaptopView, SearchRequest, StatusResponse, status_for,
};
use techcompare_core::{
    Catalog, DisplayClass, LaptopComparison, PartCategory, TechCompareError,
    primitives::DEFAULT_MAX_PRICE,
};

// =============================================================================
// HEALTH AND STATUS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_status_response_serialization() {
    let status = StatusResponse {
        laptop_count: 15,
        part_count: 45,
        brands: vec!["Apple".to_string()],
        selection: vec!["1".to_string()],
        active_build: "build-a".to_string(),
        advisory_configured: false,
    };

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"laptop_count\":15"));
    assert!(json.contains("\"active_build\":\"build-a\""));
    assert!(json.contains("\"advisory_configured\":false"));
}

// =============================================================================
// LAPTOPS
// =============================================================================

#[test]
fn test_laptop_view_flattens_laptop() {
    let catalog = Catalog::seed();
    let view = LaptopView::from(catalog.laptop("1").unwrap());

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["id"], "1");
    assert_eq!(value["displaySize"], 13.6);
    assert!(value.get("laptop").is_none());
    assert!(value["chart_ppi"].is_number());

    let back: LaptopView = serde_json::from_value(value).unwrap();
    assert_eq!(back.laptop, view.laptop);
}

#[test]
fn test_search_request_defaults() {
    let request: SearchRequest = serde_json::from_str("{}").unwrap();
    assert!(!request.rank);
    assert_eq!(request.filter.max_price, DEFAULT_MAX_PRICE);
    assert!(request.filter.brands.is_empty());
}

#[test]
fn test_search_request_reads_filter_fields() {
    let request: SearchRequest = serde_json::from_value(json!({
        "search": "rog",
        "ram": [16, 32],
        "display": ["small"],
        "cpu_brands": ["AMD"],
        "rank": true
    }))
    .unwrap();

    assert!(request.rank);
    assert_eq!(request.filter.search, "rog");
    assert_eq!(request.filter.ram, vec![16, 32]);
    assert_eq!(request.filter.display, vec![DisplayClass::Small]);
    assert_eq!(request.filter.cpu_brands, vec!["AMD"]);
}

// =============================================================================
// BUILDS
// =============================================================================

#[test]
fn test_evaluate_request_accepts_type_alias_and_later_parts_win() {
    let request: EvaluateRequest = serde_json::from_value(json!({
        "parts": [
            { "id": "a", "name": "First", "type": "PSU", "price": 100, "wattage": 500 },
            { "id": "b", "name": "Second", "category": "PSU", "price": 200, "wattage": 750 }
        ]
    }))
    .unwrap();

    let build = request.to_build();
    assert_eq!(build.name, "Ad-hoc build");
    assert_eq!(build.occupied_count(), 1);
    assert_eq!(
        build.slot(PartCategory::Psu).map(|p| p.id.as_str()),
        Some("b")
    );
}

// =============================================================================
// COMPARISON AND CHAT
// =============================================================================

#[test]
fn test_compare_request_defaults_to_tray() {
    let request: CompareRequest = serde_json::from_str("{}").unwrap();
    assert!(request.ids.is_empty());
    assert!(!request.advise);
}

#[test]
fn test_compare_response_omits_missing_advisory() {
    let response = CompareResponse {
        comparison: LaptopComparison::of(&[]),
        advisory: None,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("advisory").is_none());
    assert_eq!(value["comparison"]["rows"], json!([]));
    assert!(value["comparison"]["best_ppi"].is_null());
}

#[test]
fn test_chat_request_defaults() {
    let request: ChatRequest = serde_json::from_value(json!({
        "messages": [
            { "role": "user", "text": "hi" },
            { "role": "model", "text": "hello" }
        ],
        "image": { "data": "aGVsbG8=" }
    }))
    .unwrap();

    assert_eq!(request.messages[1].role, ChatRole::Model);
    assert_eq!(
        request.image.map(|i| i.mime_type),
        Some("image/jpeg".to_string())
    );
    assert!(request.context.is_none());
}

#[test]
fn test_chat_request_rejects_unknown_role() {
    let result: Result<ChatRequest, _> = serde_json::from_value(json!({
        "messages": [{ "role": "assistant", "text": "hi" }]
    }));
    assert!(result.is_err());
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_error_status_mapping() {
    assert_eq!(
        status_for(&TechCompareError::LaptopNotFound("9".into())).as_u16(),
        404
    );
    assert_eq!(
        status_for(&TechCompareError::BuildNotFound("x".into())).as_u16(),
        404
    );
    assert_eq!(
        status_for(&TechCompareError::InvalidCategory("x".into())).as_u16(),
        400
    );
    assert_eq!(status_for(&TechCompareError::SelectionFull(4)).as_u16(), 409);
    assert_eq!(
        status_for(&TechCompareError::IoError("disk".into())).as_u16(),
        500
    );
}

#[test]
fn test_api_error_keeps_message() {
    let error = ApiError::from(TechCompareError::PartNotFound("cpu-x".into()));
    assert_eq!(error.status.as_u16(), 404);
    assert_eq!(error.message, "Part not found: cpu-x");
}
