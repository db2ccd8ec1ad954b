use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Product not found".to_string(),
            ),
            BasketError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Basket item not found".to_string(),
            ),
            BasketError::QuantityMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity is required".to_string(),
            ),
            BasketError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity must be a positive integer".to_string(),
            ),
            BasketError::QuantityTooLarge { max } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("Quantity cannot exceed {max} per product"),
            ),
            BasketError::InsufficientStock {
                product,
                requested,
                available,
            } => (
                StatusCode::BAD_REQUEST,
                "InsufficientStock",
                format!(
                    "Not enough \"{product}\" in stock: requested {requested}, available {available}"
                ),
            ),
            BasketError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
