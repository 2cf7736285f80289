mod health;
mod payment;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
};
use shared::{
    config::Config,
    domain::{
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
        responses::{
            HealthResponse, HealthStatus, PaymentDatesResponse, PaymentListResponse,
            PaymentResponse, PaymentsResponse,
        },
    },
    errors::ErrorResponse,
    utils::shutdown_signal,
};
use std::{future::IntoFuture, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::health::health_routes;
pub use self::payment::payment_routes;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const CORS_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(OpenApi)]
#[openapi(
    paths(
        payment::get_payments,
        payment::create_payment,
        payment::get_payment,
        payment::update_payment,
        payment::delete_payment,
        payment::get_payment_months,

        health::health_check,
    ),
    components(schemas(
        CreatePaymentRequest,
        UpdatePaymentRequest,
        PaymentResponse,
        PaymentListResponse,
        PaymentsResponse,
        PaymentDatesResponse,
        HealthResponse,
        HealthStatus,
        ErrorResponse,
    )),
    tags(
        (name = "Payment", description = "Shared expense records of a user"),
        (name = "Health", description = "Liveness probe"),
    )
)]
struct ApiDoc;

/// CORS policy for the configured origins. A `*` entry allows any origin
/// without credentials; an explicit list allows credentials.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .max_age(CORS_MAX_AGE);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

pub struct AppRouter;

impl AppRouter {
    pub fn router(app_state: AppState, cors: CorsLayer) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(payment_routes(shared_state.clone()))
            .merge(health_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(CompressionLayer::new())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Serves until a shutdown signal arrives, then waits at most the
    /// configured grace period for in-flight requests.
    pub async fn serve(config: &Config, app_state: AppState) -> Result<()> {
        let cors = cors_layer(&config.allowed_origins)?;
        let app = Self::router(app_state, cors);

        let addr = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{}/swagger-ui", config.port);

        let draining = Arc::new(Notify::new());
        let on_signal = draining.clone();

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                on_signal.notify_one();
            })
            .into_future();

        let grace = config.shutdown_grace;
        let deadline = async {
            draining.notified().await;
            info!("⏳ Draining in-flight requests for up to {grace:?}");
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            result = server => result.context("Server error")?,
            () = deadline => warn!("⌛ Grace period elapsed, dropping remaining connections"),
        }

        Ok(())
    }
}
