use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::address::errors::AddressError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, internal_error};

impl IntoErrorResponse for AddressError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match self {
            AddressError::CityEmpty => "City is required",
            AddressError::StreetEmpty => "Street is required",
            AddressError::HouseEmpty => "House is required",
            AddressError::Repository(_) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, internal_error());
            }
        };

        (StatusCode::BAD_REQUEST, ErrorResponse::validation(message))
    }
}
