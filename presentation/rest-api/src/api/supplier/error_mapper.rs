use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::supplier::errors::SupplierError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, internal_error};

impl IntoErrorResponse for SupplierError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SupplierError::NotASupplier => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new(
                    "Forbidden",
                    "Only suppliers can use this endpoint",
                )),
            ),
            SupplierError::AcceptsOrdersMissing => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation("accepts_orders is required"),
            ),
            SupplierError::InvalidPriceList(e) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(e.describe()))
            }
            SupplierError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, internal_error()),
        }
    }
}
