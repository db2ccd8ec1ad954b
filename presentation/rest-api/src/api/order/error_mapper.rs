use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, internal_error};

fn message(err: &OrderError) -> String {
    match err {
        OrderError::EmptyBasket => "Basket is empty".to_string(),
        OrderError::SupplierUnavailable { supplier, product } => format!(
            "Supplier \"{supplier}\" is not accepting orders, remove \"{product}\" from the basket"
        ),
        OrderError::InsufficientStock {
            product,
            requested,
            available,
        } => format!(
            "Not enough \"{product}\" in stock: requested {requested}, available {available}"
        ),
        OrderError::AddressMissing => "Delivery address is required".to_string(),
        OrderError::AddressMalformed => "Delivery address id is invalid".to_string(),
        OrderError::AddressNotFound => "Delivery address not found".to_string(),
        OrderError::ConfirmationFieldsMissing => {
            "Both order_id and confirmation_code are required".to_string()
        }
        OrderError::OrderIdMalformed => "Order id is invalid".to_string(),
        OrderError::NotFound => "Order not found".to_string(),
        OrderError::NoPendingCode => "No confirmation code pending for this order".to_string(),
        OrderError::CodeExpired => {
            "Confirmation code has expired, place the order again".to_string()
        }
        OrderError::CodeMismatch => "Confirmation code is incorrect".to_string(),
        OrderError::StockChanged => {
            "Stock changed since the order was placed, it can no longer be fulfilled".to_string()
        }
        OrderError::Forbidden => "Only staff may change order status".to_string(),
        OrderError::StatusNotSettable(status) => {
            format!("Status \"{status}\" cannot be set manually")
        }
        OrderError::Repository(_) => "Internal server error".to_string(),
    }
}

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            OrderError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            OrderError::Repository(_) => return (StatusCode::INTERNAL_SERVER_ERROR, internal_error()),
            _ => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (status, Json(ErrorResponse::new(name, message(&self))))
    }
}
