use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        // Internal already carries only the public message; the cause was
        // logged by the service.
        let (status, title) = match &e {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::DuplicateKey { .. } => (StatusCode::BAD_REQUEST, "Duplicate Key"),
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        Self::new(status, title, Some(e.to_string()))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        // a body that is not a valid create/update document is bad client input
        // regardless of which stage of decoding rejected it
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::DuplicateKey { fields: BTreeMap::new() }, StatusCode::BAD_REQUEST),
            (ServiceError::not_found(Uuid::new_v4()), StatusCode::NOT_FOUND),
            (ServiceError::Internal("cannot create pokemon - check server logs".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn body_rejections_become_validation_errors() {
        let rejection = JsonRejection::from(axum::extract::rejection::MissingJsonContentType::default());
        let e = JsonApiError::from(rejection);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.error, "Validation Error");
        assert!(e.message.is_some_and(|m| !m.is_empty()));
    }

    #[test]
    fn internal_error_exposes_only_public_message() {
        let e = JsonApiError::from(ServiceError::Internal("cannot list pokemon - check server logs".into()));
        assert_eq!(e.message.as_deref(), Some("cannot list pokemon - check server logs"));
    }
}
