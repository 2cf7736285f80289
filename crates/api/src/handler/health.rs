use crate::state::AppState;
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use shared::domain::responses::{HealthResponse, HealthStatus};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/warikan/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let (code, status) = match state.di_container.health.check().await {
        Ok(()) => (StatusCode::OK, HealthStatus::Pass),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Fail),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: state.version.clone(),
        }),
    )
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/warikan/v1/health", get(health_check))
        .layer(Extension(app_state))
}
