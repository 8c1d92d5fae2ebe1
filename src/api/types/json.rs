//! Request body extractor for credential payloads
//!
//! Body rejections are reported through [`ApiError`] so a malformed login or
//! registration gets the same `{"error": {...}}` envelope as a failed one.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorType};

/// `axum::Json` with envelope-shaped rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        axum::Json::<T>::from_request(req, state)
            .await
            .map(|axum::Json(value)| Json(value))
            .map_err(body_error)
    }
}

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

fn body_error(rejection: JsonRejection) -> ApiError {
    let (code, message) = match &rejection {
        JsonRejection::JsonDataError(err) => (
            "invalid_body",
            format!("Request body does not match the expected fields: {}", err.body_text()),
        ),
        JsonRejection::JsonSyntaxError(err) => (
            "invalid_json",
            format!("Request body is not valid JSON: {}", err.body_text()),
        ),
        JsonRejection::MissingJsonContentType(_) => (
            "unsupported_media_type",
            "Expected Content-Type: application/json".to_string(),
        ),
        other => ("invalid_body", format!("Unreadable request body: {}", other.body_text())),
    };

    ApiError::new(rejection.status(), ApiErrorType::InvalidRequestError, message).with_code(code)
}
