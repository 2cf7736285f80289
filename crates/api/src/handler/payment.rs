use crate::{
    middleware::{JsonBody, PathParams, QueryParams},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::payment::service::{
        command::DynPaymentCommandService, query::DynPaymentQueryService,
    },
    domain::{
        requests::{CreatePaymentRequest, FindPaymentsQuery, UpdatePaymentRequest},
        responses::{PaymentDatesResponse, PaymentResponse, PaymentsResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/warikan/v1/users/{user_id}/payments",
    tag = "Payment",
    params(
        ("user_id" = i32, Path, description = "Owner of the payments"),
        FindPaymentsQuery
    ),
    responses(
        (status = 200, description = "One page of payments", body = PaymentsResponse),
        (status = 400, description = "Malformed path", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_payments(
    Extension(service): Extension<DynPaymentQueryService>,
    PathParams(user_id): PathParams<i32>,
    QueryParams(params): QueryParams<FindPaymentsQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let Some(cursor) = params.page_cursor() else {
        debug!("Cursor {:?} points past the last page", params.cursor);
        return Ok(Json(PaymentsResponse { payments: vec![] }));
    };

    let payments = service.get_data(user_id, cursor).await?;
    Ok(Json(PaymentsResponse { payments }))
}

#[utoipa::path(
    post,
    path = "/warikan/v1/users/{user_id}/payments",
    tag = "Payment",
    params(("user_id" = i32, Path, description = "Owner of the payment")),
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = PaymentResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_payment(
    Extension(service): Extension<DynPaymentCommandService>,
    PathParams(user_id): PathParams<i32>,
    JsonBody(body): JsonBody<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body, user_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/warikan/v1/users/{user_id}/payments/{payment_id}",
    tag = "Payment",
    params(
        ("user_id" = i32, Path, description = "Owner of the payment"),
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_payment(
    Extension(service): Extension<DynPaymentQueryService>,
    PathParams((user_id, payment_id)): PathParams<(i32, i32)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(user_id, payment_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/warikan/v1/users/{user_id}/payments/{payment_id}",
    tag = "Payment",
    params(
        ("user_id" = i32, Path, description = "Owner of the payment"),
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = PaymentResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_payment(
    Extension(service): Extension<DynPaymentCommandService>,
    PathParams((user_id, payment_id)): PathParams<(i32, i32)>,
    JsonBody(body): JsonBody<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(&body, user_id, payment_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/warikan/v1/users/{user_id}/payments/{payment_id}",
    tag = "Payment",
    params(
        ("user_id" = i32, Path, description = "Owner of the payment"),
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 403, description = "Payment belongs to another user", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_payment(
    Extension(service): Extension<DynPaymentCommandService>,
    PathParams((user_id, payment_id)): PathParams<(i32, i32)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.delete_by_id(user_id, payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/warikan/v1/users/{user_id}/payments/monthly_cost",
    tag = "Payment",
    params(("user_id" = i32, Path, description = "Owner of the payments")),
    responses(
        (status = 200, description = "Months with payments, newest first", body = PaymentDatesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_payment_months(
    Extension(service): Extension<DynPaymentQueryService>,
    PathParams(user_id): PathParams<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let payments_date = service.fetch_date(user_id).await?;
    Ok(Json(PaymentDatesResponse { payments_date }))
}

pub fn payment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/warikan/v1/users/{user_id}/payments",
            get(get_payments).post(create_payment),
        )
        .route(
            "/warikan/v1/users/{user_id}/payments/monthly_cost",
            get(get_payment_months),
        )
        .route(
            "/warikan/v1/users/{user_id}/payments/{payment_id}",
            get(get_payment)
                .patch(update_payment)
                .delete(delete_payment),
        )
        .layer(Extension(app_state.di_container.payment_command.clone()))
        .layer(Extension(app_state.di_container.payment_query.clone()))
}
