mod error;
mod http;
mod repository;
mod service;
mod validate;

pub use self::error::ErrorResponse;
pub use self::http::{AppErrorHttp, error_status};
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
