//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Advisory calls never hold the session lock: the data they need is cloned
//! out under a read lock first.

use super::{
    AppState,
    types::{
        AdviceResponse, ApiError, AssignRequest, BuildView, ChatRequest, ChatResponse,
        CompareRequest, CompareResponse, EvaluateRequest, HealthResponse, ImportRecordsRequest,
        ImportUrlsRequest, LaptopView, PartsQuery, SearchRequest, SelectionResponse, SlotResponse,
        StatusResponse, ToggleRequest,
    },
};
use crate::advisory::service;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;
use techcompare_core::{
    BUILD_A, BUILD_B, BuildComparison, BuildSummary, ImportOutcome, Laptop, LaptopComparison,
    Part, PartCategory, Session, TechCompareError, primitives::MAX_COMPARE_LAPTOPS, rank_by_ppi,
};

// =============================================================================
// HEALTH / STATUS
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

fn status_of(session: &Session, advisory_configured: bool) -> StatusResponse {
    StatusResponse {
        laptop_count: session.catalog().laptops().len(),
        part_count: session.catalog().parts().len(),
        brands: session.catalog().brands(),
        selection: session.selection().ids().to_vec(),
        active_build: session.active_build().id.clone(),
        advisory_configured,
    }
}

/// Catalog and session status.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(status_of(&session, state.advisory.is_some())),
    )
}

// =============================================================================
// LAPTOPS
// =============================================================================

/// All laptops in catalog order.
pub async fn laptops_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    let views: Vec<LaptopView> = session
        .catalog()
        .laptops()
        .iter()
        .map(LaptopView::from)
        .collect();
    Json(views)
}

/// Filtered laptops, optionally ranked by PPI.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    let session = state.session.read().await;
    let matches = request.filter.apply(session.catalog().laptops());

    let views: Vec<LaptopView> = if request.rank {
        rank_by_ppi(matches)
            .into_iter()
            .map(|(l, _)| LaptopView::from(l))
            .collect()
    } else {
        matches.into_iter().map(LaptopView::from).collect()
    };
    Json(views)
}

/// One laptop.
pub async fn laptop_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LaptopView>, ApiError> {
    let session = state.session.read().await;
    let laptop = session.catalog().laptop(&id)?;
    Ok(Json(LaptopView::from(laptop)))
}

// =============================================================================
// PARTS
// =============================================================================

/// Catalog parts, optionally of one category.
pub async fn parts_handler(
    State(state): State<AppState>,
    Query(query): Query<PartsQuery>,
) -> Result<Json<Vec<Part>>, ApiError> {
    let session = state.session.read().await;
    let parts: Vec<Part> = match query.category.as_deref() {
        Some(name) => {
            let category: PartCategory = name.parse()?;
            session
                .catalog()
                .parts_in(category)
                .into_iter()
                .cloned()
                .collect()
        }
        None => session.catalog().parts().to_vec(),
    };
    Ok(Json(parts))
}

// =============================================================================
// BUILDS
// =============================================================================

/// A stored build and its evaluation.
pub async fn build_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BuildView>, ApiError> {
    let session = state.session.read().await;
    let build = session.build(&id)?;
    Ok(Json(BuildView {
        summary: BuildSummary::evaluate(build),
        build: build.clone(),
    }))
}

/// Place a catalog part into its slot.
pub async fn assign_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AssignRequest>,
) -> Result<Json<SlotResponse>, ApiError> {
    let mut session = state.session.write().await;
    let replaced = session.assign_part(&id, &request.part_id)?;
    tracing::debug!(build = %id, part = %request.part_id, "Part assigned");
    Ok(Json(SlotResponse {
        summary: session.evaluate(&id)?,
        replaced,
    }))
}

/// Empty one slot.
pub async fn clear_slot_handler(
    State(state): State<AppState>,
    Path((id, category)): Path<(String, String)>,
) -> Result<Json<SlotResponse>, ApiError> {
    let category: PartCategory = category.parse()?;
    let mut session = state.session.write().await;
    let replaced = session.clear_slot(&id, category)?;
    Ok(Json(SlotResponse {
        summary: session.evaluate(&id)?,
        replaced,
    }))
}

/// Evaluate a build that is not stored in the session.
pub async fn evaluate_handler(Json(request): Json<EvaluateRequest>) -> impl IntoResponse {
    Json(BuildSummary::evaluate(&request.to_build()))
}

/// `build-a` against `build-b`.
pub async fn compare_builds_handler(State(state): State<AppState>) -> Json<BuildComparison> {
    let session = state.session.read().await;
    Json(session.compare_builds())
}

/// Prose review of a stored build.
pub async fn build_advice_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let build = {
        let session = state.session.read().await;
        session.build(&id)?.clone()
    };
    let summary = BuildSummary::evaluate(&build);
    let advice = service::build_advisory(state.advisory.as_ref(), &build, &summary).await;
    Ok(Json(AdviceResponse { advice }))
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Toggle a laptop in the comparison tray.
pub async fn toggle_handler(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let mut session = state.session.write().await;
    let selected = session.toggle_comparison(&request.laptop_id)?;
    Ok(Json(SelectionResponse {
        selected,
        ids: session.selection().ids().to_vec(),
    }))
}

/// Comparison table of the given laptops, or of the tray when none are given.
pub async fn compare_laptops_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    if request.ids.len() > MAX_COMPARE_LAPTOPS {
        return Err(TechCompareError::Validation(format!(
            "at most {} laptops can be compared",
            MAX_COMPARE_LAPTOPS
        ))
        .into());
    }

    let laptops: Vec<Laptop> = {
        let session = state.session.read().await;
        if request.ids.is_empty() {
            session.selected_laptops().into_iter().cloned().collect()
        } else {
            request
                .ids
                .iter()
                .map(|id| session.catalog().laptop(id).cloned())
                .collect::<Result<_, _>>()?
        }
    };

    let refs: Vec<&Laptop> = laptops.iter().collect();
    let advisory = if request.advise && !refs.is_empty() {
        Some(service::comparison_advisory(state.advisory.as_ref(), &refs).await)
    } else {
        None
    };

    Ok(Json(CompareResponse {
        comparison: LaptopComparison::of(&refs),
        advisory,
    }))
}

// =============================================================================
// CHAT
// =============================================================================

/// Hardware consultant chat.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let image = request
        .image
        .map(|img| img.normalized())
        .transpose()
        .map_err(ApiError::bad_request)?;

    let context = {
        let session = state.session.read().await;
        serde_json::json!({
            "activeBuild": session.active_build().id,
            "comparison": session.selection().ids(),
            "extra": request.context.unwrap_or(Value::Null),
        })
    };

    let reply =
        service::chat_reply(state.advisory.as_ref(), &request.messages, &context, image).await;
    Ok(Json(ChatResponse { reply }))
}

// =============================================================================
// IMPORT
// =============================================================================

/// Import laptops extracted by the collaborator from product URLs.
pub async fn import_urls_handler(
    State(state): State<AppState>,
    Json(request): Json<ImportUrlsRequest>,
) -> Json<ImportOutcome> {
    let records = service::fetch_laptop_records(state.advisory.as_ref(), &request.urls).await;
    if records.is_empty() {
        return Json(ImportOutcome::nothing());
    }
    let mut session = state.session.write().await;
    Json(service::merge_records(
        &mut session,
        records,
        &service::batch_tag(),
    ))
}

/// Import records produced by the collaborator elsewhere.
pub async fn import_records_handler(
    State(state): State<AppState>,
    Json(request): Json<ImportRecordsRequest>,
) -> Json<ImportOutcome> {
    let mut session = state.session.write().await;
    Json(service::merge_records(
        &mut session,
        request.records,
        &service::batch_tag(),
    ))
}

// =============================================================================
// SESSION
// =============================================================================

/// Empty both builds and the tray.
pub async fn reset_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let mut session = state.session.write().await;
    session.reset();
    tracing::info!("Session reset");
    Json(status_of(&session, state.advisory.is_some()))
}

// =============================================================================
// METRICS HANDLER
// =============================================================================

type Sample = (Option<&'static str>, u64);

fn push_gauge(out: &mut String, name: &str, help: &str, samples: &[Sample]) {
    out.push_str(&format!("# HELP {name} {help}\n# TYPE {name} gauge\n"));
    for (build, value) in samples {
        match build {
            Some(build) => out.push_str(&format!("{name}{{build=\"{build}\"}} {value}\n")),
            None => out.push_str(&format!("{name} {value}\n")),
        }
    }
}

fn per_build(builds: &[(&'static str, BuildSummary)], metric: fn(&BuildSummary) -> u64) -> Vec<Sample> {
    builds
        .iter()
        .map(|(id, summary)| (Some(*id), metric(summary)))
        .collect()
}

/// Prometheus text exposition of catalog and build gauges.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    let builds: Vec<(&'static str, BuildSummary)> = [BUILD_A, BUILD_B]
        .into_iter()
        .filter_map(|id| session.evaluate(id).ok().map(|s| (id, s)))
        .collect();

    let mut body = String::new();
    push_gauge(
        &mut body,
        "techcompare_laptops",
        "Laptops in the catalog",
        &[(None, session.catalog().laptops().len() as u64)],
    );
    push_gauge(
        &mut body,
        "techcompare_parts",
        "Parts in the catalog",
        &[(None, session.catalog().parts().len() as u64)],
    );
    push_gauge(
        &mut body,
        "techcompare_comparison_selected",
        "Laptops in the comparison tray",
        &[(None, session.selection().len() as u64)],
    );
    push_gauge(
        &mut body,
        "techcompare_build_price",
        "Total price of a build",
        &per_build(&builds, |s| s.total_price),
    );
    push_gauge(
        &mut body,
        "techcompare_build_power_watts",
        "Estimated power draw of a build",
        &per_build(&builds, |s| s.total_power_draw),
    );
    push_gauge(
        &mut body,
        "techcompare_build_compatible",
        "1 when a build has no compatibility issues",
        &per_build(&builds, |s| u64::from(s.compatibility.compatible)),
    );

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
