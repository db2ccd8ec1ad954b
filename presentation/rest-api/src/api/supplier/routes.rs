use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use serde_json::Value;

use business::domain::supplier::use_cases::get_orders::{
    GetSupplierOrdersParams, GetSupplierOrdersUseCase,
};
use business::domain::supplier::use_cases::toggle_accepts_orders::{
    ToggleAcceptsOrdersParams, ToggleAcceptsOrdersUseCase,
};
use business::domain::supplier::use_cases::upload_price_list::{
    UploadPriceListParams, UploadPriceListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::security::JwtBearer;
use crate::api::supplier::dto::{
    PriceListImportResponse, SupplierResponse, ToggleAcceptsOrdersRequest, raw_price_list,
};
use crate::api::tags::ApiTags;

pub struct SupplierApi {
    toggle_use_case: Arc<dyn ToggleAcceptsOrdersUseCase>,
    get_orders_use_case: Arc<dyn GetSupplierOrdersUseCase>,
    upload_price_list_use_case: Arc<dyn UploadPriceListUseCase>,
}

impl SupplierApi {
    pub fn new(
        toggle_use_case: Arc<dyn ToggleAcceptsOrdersUseCase>,
        get_orders_use_case: Arc<dyn GetSupplierOrdersUseCase>,
        upload_price_list_use_case: Arc<dyn UploadPriceListUseCase>,
    ) -> Self {
        Self {
            toggle_use_case,
            get_orders_use_case,
            upload_price_list_use_case,
        }
    }
}

/// Supplier API
///
/// Endpoints reserved for users owning a supplier profile.
#[OpenApi]
impl SupplierApi {
    /// Toggle order acceptance
    ///
    /// While off, checkout rejects baskets holding this supplier's products.
    #[oai(
        path = "/supplier/toggle-accepts-orders",
        method = "put",
        tag = "ApiTags::Supplier"
    )]
    async fn toggle_accepts_orders(
        &self,
        auth: JwtBearer,
        body: Json<ToggleAcceptsOrdersRequest>,
    ) -> ToggleAcceptsOrdersResponse {
        let params = ToggleAcceptsOrdersParams {
            user_id: auth.0.user_id,
            accepts_orders: body.0.accepts_orders,
        };

        match self.toggle_use_case.execute(params).await {
            Ok(supplier) => ToggleAcceptsOrdersResponse::Ok(Json(supplier.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ToggleAcceptsOrdersResponse::BadRequest(json),
                    403 => ToggleAcceptsOrdersResponse::Forbidden(json),
                    _ => ToggleAcceptsOrdersResponse::InternalError(json),
                }
            }
        }
    }

    /// Orders containing the supplier's products
    #[oai(path = "/supplier/orders", method = "get", tag = "ApiTags::Supplier")]
    async fn get_orders(&self, auth: JwtBearer) -> GetSupplierOrdersResponse {
        let params = GetSupplierOrdersParams {
            user_id: auth.0.user_id,
        };

        match self.get_orders_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetSupplierOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetSupplierOrdersResponse::Forbidden(json),
                    _ => GetSupplierOrdersResponse::InternalError(json),
                }
            }
        }
    }

    /// Upload price list
    ///
    /// Upserts categories, parameters and products from a JSON price list.
    /// Any invalid entry rejects the whole document.
    #[oai(
        path = "/supplier/upload-price",
        method = "post",
        tag = "ApiTags::Supplier"
    )]
    async fn upload_price_list(
        &self,
        auth: JwtBearer,
        body: Json<Value>,
    ) -> UploadPriceListResponse {
        let params = UploadPriceListParams {
            user_id: auth.0.user_id,
            document: raw_price_list(&body.0),
        };

        match self.upload_price_list_use_case.execute(params).await {
            Ok(import) => UploadPriceListResponse::Created(Json(import.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadPriceListResponse::BadRequest(json),
                    403 => UploadPriceListResponse::Forbidden(json),
                    _ => UploadPriceListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleAcceptsOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSupplierOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadPriceListResponse {
    #[oai(status = 201)]
    Created(Json<PriceListImportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
