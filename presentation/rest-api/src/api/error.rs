use poem::http::StatusCode;
use poem::web::Json as PoemJson;
use poem_openapi::error::{ParseParamError, ParseRequestPayloadError};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Body of every non-2xx answer.
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. `ValidationError`
    pub name: String,
    /// Human readable explanation
    pub error: String,
}

impl ErrorResponse {
    pub fn new(name: &str, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            error: error.into(),
        }
    }

    pub fn validation(error: impl Into<String>) -> Json<Self> {
        Json(Self::new("ValidationError", error))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("InternalError", "Internal server error"))
}

/// Wrong-typed or malformed JSON bodies never reach a handler.
pub async fn handle_payload_error(
    err: ParseRequestPayloadError,
) -> (StatusCode, PoemJson<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        PoemJson(ErrorResponse::new("ValidationError", err.to_string())),
    )
}

/// Path or query parameters that do not parse, e.g. a non-numeric item id.
pub async fn handle_param_error(err: ParseParamError) -> (StatusCode, PoemJson<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        PoemJson(ErrorResponse::new("ValidationError", err.to_string())),
    )
}
