use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use business::domain::address::use_cases::get_all::{
    GetAllAddressesParams, GetAllAddressesUseCase,
};

use crate::api::address::dto::{AddressResponse, CreateAddressRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct AddressApi {
    create_use_case: Arc<dyn CreateAddressUseCase>,
    get_all_use_case: Arc<dyn GetAllAddressesUseCase>,
}

impl AddressApi {
    pub fn new(
        create_use_case: Arc<dyn CreateAddressUseCase>,
        get_all_use_case: Arc<dyn GetAllAddressesUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

#[OpenApi]
impl AddressApi {
    /// List delivery addresses
    #[oai(path = "/addresses", method = "get", tag = "ApiTags::Addresses")]
    async fn get_all(&self, auth: JwtBearer) -> GetAllAddressesResponse {
        let params = GetAllAddressesParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(addresses) => {
                let responses: Vec<AddressResponse> =
                    addresses.into_iter().map(|a| a.into()).collect();
                GetAllAddressesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllAddressesResponse::InternalError(json)
            }
        }
    }

    /// Save a delivery address
    #[oai(path = "/addresses", method = "post", tag = "ApiTags::Addresses")]
    async fn create(&self, auth: JwtBearer, body: Json<CreateAddressRequest>) -> CreateAddressResponse {
        let params = CreateAddressParams {
            user_id: auth.0.user_id,
            city: body.0.city,
            street: body.0.street,
            house: body.0.house,
            apartment: body.0.apartment,
        };

        match self.create_use_case.execute(params).await {
            Ok(address) => CreateAddressResponse::Created(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateAddressResponse::BadRequest(json),
                    _ => CreateAddressResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllAddressesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AddressResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateAddressResponse {
    #[oai(status = 201)]
    Created(Json<AddressResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
