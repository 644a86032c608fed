//! Top-level router and middleware stack.

use axum::error_handling::HandleErrorLayer;
use axum::extract::Request;
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, Method};
use serde_json::{json, Value};
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::error::handle_middleware_error;
use super::pull_request::pull_request_routes;
use super::state::AppState;
use super::team::team_routes;
use super::user::user_routes;

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Builds the application router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health`
/// - `/team/*` - see [`team_routes`]
/// - `/users/*` - see [`user_routes`]
/// - `/pullRequest/*` - see [`pull_request_routes`]
///
/// Every response carries an `x-request-id` header, generated when the
/// client did not send one. Requests exceeding the configured timeout are
/// answered with `408 REQUEST_TIMEOUT` in the usual error body and their
/// in-flight transaction is rolled back.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route("/health", get(health))
        .nest("/team", team_routes())
        .nest("/users", user_routes())
        .nest("/pullRequest", pull_request_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(trace)
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(cors_layer(config)),
        )
}
