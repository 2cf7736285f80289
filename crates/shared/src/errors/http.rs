use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

const BAD_REQUEST_MSG: &str = "要求の形式が正しくありません。";
const UNAUTHORIZED_MSG: &str = "サーバーとの認証に失敗しました。再度ログインしてください。";
const FORBIDDEN_MSG: &str = "この操作を行う権限がありません。";
const NOT_FOUND_MSG: &str = "ページが見つかりません。";
const CONFLICT_MSG: &str = "競合が発生しました。";
const INTERNAL_SERVER_ERROR_MSG: &str = "システム内部エラーが発生しました。";
const SERVICE_UNAVAILABLE_MSG: &str = "サービスが一時的に利用できません。";

/// Status code and client-facing message for an error kind.
pub fn error_status(err: &ServiceError) -> (StatusCode, &'static str) {
    match err {
        ServiceError::InvalidParameter(_) | ServiceError::BadRequest => {
            (StatusCode::BAD_REQUEST, BAD_REQUEST_MSG)
        }
        ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MSG),
        ServiceError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN_MSG),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MSG),
        ServiceError::Conflict => (StatusCode::CONFLICT, CONFLICT_MSG),
        ServiceError::ServiceUnavailable => {
            (StatusCode::SERVICE_UNAVAILABLE, SERVICE_UNAVAILABLE_MSG)
        }
        ServiceError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MSG),
    }
}

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for AppErrorHttp {
    fn from(rejection: JsonRejection) -> Self {
        warn!("📝 Rejected request body: {}", rejection.body_text());
        Self(ServiceError::BadRequest)
    }
}

impl From<PathRejection> for AppErrorHttp {
    fn from(rejection: PathRejection) -> Self {
        warn!("📝 Rejected path parameters: {}", rejection.body_text());
        Self(ServiceError::BadRequest)
    }
}

impl From<QueryRejection> for AppErrorHttp {
    fn from(rejection: QueryRejection) -> Self {
        warn!("📝 Rejected query string: {}", rejection.body_text());
        Self(ServiceError::BadRequest)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = error_status(&self.0);

        if status.is_server_error() {
            error!("💥 Request failed with {status}: {}", self.0);
        } else {
            info!("↩️ Request rejected with {status}: {}", self.0);
        }

        let body = Json(ErrorResponse {
            msg: msg.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_kind_to_its_status() {
        let cases = [
            (
                ServiceError::InvalidParameter("payment".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::BadRequest, StatusCode::BAD_REQUEST),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ServiceError::Forbidden, StatusCode::FORBIDDEN),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Conflict, StatusCode::CONFLICT),
            (
                ServiceError::ServiceUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ServiceError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(error_status(&err).0, expected, "{err:?}");
        }
    }

    #[test]
    fn invalid_parameter_detail_is_not_sent_to_client() {
        let (_, msg) = error_status(&ServiceError::InvalidParameter(
            "category_id: required".into(),
        ));
        assert_eq!(msg, BAD_REQUEST_MSG);
    }

    #[test]
    fn response_carries_status() {
        let response = AppErrorHttp(ServiceError::Internal).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
