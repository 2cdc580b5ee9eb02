//! # TechCompare HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /status` - Catalog and session status
//! - `GET /laptops`, `POST /laptops/search`, `GET /laptops/{id}` - Laptop browsing with PPI
//! - `GET /parts` - Part catalog, `?category=CPU` to narrow
//! - `GET /builds/{id}`, `PUT /builds/{id}/slots`, `DELETE /builds/{id}/slots/{category}` - Stored builds
//! - `POST /builds/evaluate` - Evaluate an ad-hoc build
//! - `GET /builds/compare` - `build-a` against `build-b`
//! - `POST /builds/{id}/advice` - Build review advisory
//! - `POST /compare/toggle`, `POST /compare/laptops` - Laptop comparison tray
//! - `POST /chat` - Hardware consultant chat
//! - `POST /import`, `POST /import/records` - Catalog import
//! - `POST /session/reset` - Empty both builds and the tray
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `TECHCOMPARE_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `TECHCOMPARE_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `TECHCOMPARE_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
pub mod types;

pub use auth::{API_KEY_ENV, get_api_key_from_env};
pub use middleware::{RATE_LIMIT_ENV, create_rate_limiter, get_rate_limit_from_env};

use crate::advisory::AdvisoryClient;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use techcompare_core::{Session, TechCompareError};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Environment variable holding the allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "TECHCOMPARE_CORS_ORIGINS";

/// Maximum request body size (2 MiB).
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    /// Generation collaborator; `None` makes every advisory call fall back.
    pub advisory: Option<AdvisoryClient>,
}

impl AppState {
    /// State without a collaborator.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            advisory: None,
        }
    }

    #[must_use]
    pub fn with_advisory(session: Session, advisory: Option<AdvisoryClient>) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            advisory,
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

const CORS_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer from `TECHCOMPARE_CORS_ORIGINS`.
///
/// `*` allows every origin; unset or unusable values fall back to localhost.
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var(CORS_ORIGINS_ENV).ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins ({}=*). This is insecure for production!",
                CORS_ORIGINS_ENV
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in {}, defaulting to localhost only",
                    CORS_ORIGINS_ENV
                );
                build_localhost_cors()
            } else {
                restricted_cors(allowed)
            }
        }
        None => build_localhost_cors(),
    }
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(CORS_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse().ok())
    .collect();
    restricted_cors(origins)
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner): tracing, CORS, body limit, rate
/// limiting (if enabled), authentication (if configured).
pub fn create_router(state: AppState) -> Router {
    let rate_limit = get_rate_limit_from_env();
    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible. \
             Set {} to enable authentication.",
            API_KEY_ENV
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route("/laptops", get(handlers::laptops_handler))
        .route("/laptops/search", post(handlers::search_handler))
        .route("/laptops/{id}", get(handlers::laptop_handler))
        .route("/parts", get(handlers::parts_handler))
        .route("/builds/evaluate", post(handlers::evaluate_handler))
        .route("/builds/compare", get(handlers::compare_builds_handler))
        .route("/builds/{id}", get(handlers::build_handler))
        .route("/builds/{id}/slots", put(handlers::assign_handler))
        .route(
            "/builds/{id}/slots/{category}",
            delete(handlers::clear_slot_handler),
        )
        .route("/builds/{id}/advice", post(handlers::build_advice_handler))
        .route("/compare/toggle", post(handlers::toggle_handler))
        .route("/compare/laptops", post(handlers::compare_laptops_handler))
        .route("/chat", post(handlers::chat_handler))
        .route("/import", post(handlers::import_urls_handler))
        .route("/import/records", post(handlers::import_records_handler))
        .route("/session/reset", post(handlers::reset_handler))
        .route("/metrics", get(handlers::metrics_handler));

    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer())
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Serve the API on `addr` until Ctrl+C.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), TechCompareError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| TechCompareError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("TechCompare HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutdown signal received"),
                Err(e) => {
                    tracing::warn!("Cannot listen for Ctrl+C: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
        .map_err(|e| TechCompareError::IoError(format!("Server error: {}", e)))
}
