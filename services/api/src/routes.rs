use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use disclosure_check::wizard::auth::{AuthGateway, Credentials, LoginResponse};
use disclosure_check::wizard::{wizard_router, SharedSession};

use crate::infra::AppState;

pub(crate) type SharedAuthGateway = Arc<dyn AuthGateway>;

/// The wizard routes plus the service endpoints: health, readiness, metrics,
/// and the sign-in exchanges.
pub(crate) fn with_wizard_routes(session: SharedSession) -> axum::Router {
    wizard_router(session)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/auth/login", axum::routing::post(login_endpoint))
        .route(
            "/api/v1/auth/validate",
            axum::routing::post(validate_token_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn login_endpoint(
    Extension(gateway): Extension<SharedAuthGateway>,
    Json(credentials): Json<Credentials>,
) -> (StatusCode, Json<LoginResponse>) {
    let response = gateway.login(&credentials);
    let status = if response.success {
        StatusCode::OK
    } else {
        tracing::warn!(email = %credentials.email, "login rejected");
        StatusCode::UNAUTHORIZED
    };
    (status, Json(response))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateTokenRequest {
    pub(crate) token: String,
}

pub(crate) async fn validate_token_endpoint(
    Extension(gateway): Extension<SharedAuthGateway>,
    Json(request): Json<ValidateTokenRequest>,
) -> Json<serde_json::Value> {
    let valid = gateway.validate_token(&request.token);
    Json(json!({ "valid": valid }))
}
