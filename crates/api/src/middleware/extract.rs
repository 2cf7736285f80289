//! Extractors whose rejections use the `{"msg": ...}` error envelope instead
//! of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};
use shared::errors::AppErrorHttp;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppErrorHttp))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppErrorHttp))]
pub struct PathParams<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppErrorHttp))]
pub struct QueryParams<T>(pub T);
