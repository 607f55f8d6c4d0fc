use axum::extract::FromRequest;

use crate::errors::JsonApiError;

/// `axum::Json` whose rejections (bad syntax, wrong field types, missing
/// content type) are reported in the same `{"error","message"}` shape as
/// service errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);
