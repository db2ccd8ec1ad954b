use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::model::OrderStatus;
use business::domain::order::use_cases::confirm::{ConfirmOrderParams, ConfirmOrderUseCase};
use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::set_status::{SetOrderStatusParams, SetOrderStatusUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    ConfirmOrderRequest, CreateOrderRequest, OrderResponse, SetOrderStatusRequest,
};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    confirm_use_case: Arc<dyn ConfirmOrderUseCase>,
    set_status_use_case: Arc<dyn SetOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        confirm_use_case: Arc<dyn ConfirmOrderUseCase>,
        set_status_use_case: Arc<dyn SetOrderStatusUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            confirm_use_case,
            set_status_use_case,
        }
    }
}

/// Orders API
///
/// Two-step checkout: create an order from the basket, then confirm it with the emailed code.
#[OpenApi]
impl OrderApi {
    /// Create order
    ///
    /// Snapshots the basket into a `new` order and emails a confirmation code.
    /// Stock is not touched until confirmation.
    #[oai(path = "/orders/create", method = "post", tag = "ApiTags::Orders")]
    async fn create(&self, auth: JwtBearer, body: Json<CreateOrderRequest>) -> CreateOrderResponse {
        let params = CreateOrderParams {
            user_id: auth.0.user_id,
            recipient_email: auth.0.email,
            delivery_address_id: body.0.delivery_address_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateOrderResponse::BadRequest(json),
                    _ => CreateOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Confirm order
    ///
    /// Consumes the code, decrements stock and empties the basket in one transaction.
    #[oai(path = "/orders/confirm", method = "post", tag = "ApiTags::Orders")]
    async fn confirm(
        &self,
        auth: JwtBearer,
        body: Json<ConfirmOrderRequest>,
    ) -> ConfirmOrderResponse {
        let params = ConfirmOrderParams {
            user_id: auth.0.user_id,
            order_id: body.0.order_id,
            code: body.0.confirmation_code,
        };

        match self.confirm_use_case.execute(params).await {
            Ok(order) => ConfirmOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ConfirmOrderResponse::BadRequest(json),
                    404 => ConfirmOrderResponse::NotFound(json),
                    _ => ConfirmOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Set order status
    ///
    /// Staff only. Moves an order to `assembled`, `sent`, `delivered` or `canceled`.
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn set_status(
        &self,
        auth: JwtBearer,
        id: Path<i64>,
        body: Json<SetOrderStatusRequest>,
    ) -> SetOrderStatusResponse {
        let status = match body.0.status.parse::<OrderStatus>() {
            Ok(status) => status,
            Err(e) => return SetOrderStatusResponse::BadRequest(ErrorResponse::validation(e)),
        };

        let params = SetOrderStatusParams {
            order_id: id.0,
            status,
            actor_is_staff: auth.0.is_staff,
        };

        match self.set_status_use_case.execute(params).await {
            Ok(order) => SetOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SetOrderStatusResponse::BadRequest(json),
                    403 => SetOrderStatusResponse::Forbidden(json),
                    404 => SetOrderStatusResponse::NotFound(json),
                    _ => SetOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
