use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::basket::model::QuantityUpdate;
use business::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use business::domain::basket::use_cases::remove_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};
use business::domain::basket::use_cases::update_quantity::{
    UpdateBasketItemQuantityParams, UpdateBasketItemQuantityUseCase,
};
use business::domain::basket::use_cases::view::{ViewBasketParams, ViewBasketUseCase};

use crate::api::basket::dto::{
    AddBasketItemRequest, BasketItemResponse, BasketResponse, UpdateBasketItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct BasketApi {
    view_use_case: Arc<dyn ViewBasketUseCase>,
    add_item_use_case: Arc<dyn AddBasketItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateBasketItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
}

impl BasketApi {
    pub fn new(
        view_use_case: Arc<dyn ViewBasketUseCase>,
        add_item_use_case: Arc<dyn AddBasketItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateBasketItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
    ) -> Self {
        Self {
            view_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
        }
    }
}

/// Basket API
///
/// The caller's own cart. A basket is created on first use.
#[OpenApi]
impl BasketApi {
    /// View basket
    ///
    /// Returns every line with live product data plus quantity and price totals.
    #[oai(path = "/basket", method = "get", tag = "ApiTags::Basket")]
    async fn view(&self, auth: JwtBearer) -> ViewBasketResponse {
        let params = ViewBasketParams {
            user_id: auth.0.user_id,
        };

        match self.view_use_case.execute(params).await {
            Ok(basket) => ViewBasketResponse::Ok(Json(basket.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ViewBasketResponse::InternalError(json)
            }
        }
    }

    /// Add product to basket
    ///
    /// Adding a product already in the basket increases its quantity.
    /// Stock is checked at checkout, not here.
    #[oai(path = "/basket/add", method = "post", tag = "ApiTags::Basket")]
    async fn add(&self, auth: JwtBearer, body: Json<AddBasketItemRequest>) -> AddBasketItemResponse {
        let params = AddBasketItemParams {
            user_id: auth.0.user_id,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddBasketItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddBasketItemResponse::BadRequest(json),
                    404 => AddBasketItemResponse::NotFound(json),
                    _ => AddBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update item quantity
    ///
    /// Sets the quantity of one of the caller's items. Zero or less removes it.
    #[oai(
        path = "/basket/update/:item_id",
        method = "put",
        tag = "ApiTags::Basket"
    )]
    async fn update(
        &self,
        auth: JwtBearer,
        item_id: Path<i64>,
        body: Json<UpdateBasketItemRequest>,
    ) -> UpdateBasketItemResponse {
        let params = UpdateBasketItemQuantityParams {
            user_id: auth.0.user_id,
            item_id: item_id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(QuantityUpdate::Updated(item)) => UpdateBasketItemResponse::Ok(Json(item.into())),
            Ok(QuantityUpdate::Removed) => UpdateBasketItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBasketItemResponse::BadRequest(json),
                    404 => UpdateBasketItemResponse::NotFound(json),
                    _ => UpdateBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove item
    #[oai(
        path = "/basket/remove/:item_id",
        method = "delete",
        tag = "ApiTags::Basket"
    )]
    async fn remove(&self, auth: JwtBearer, item_id: Path<i64>) -> RemoveBasketItemResponse {
        let params = RemoveBasketItemParams {
            user_id: auth.0.user_id,
            item_id: item_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => RemoveBasketItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveBasketItemResponse::NotFound(json),
                    _ => RemoveBasketItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ViewBasketResponse {
    #[oai(status = 200)]
    Ok(Json<BasketResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddBasketItemResponse {
    #[oai(status = 201)]
    Created(Json<BasketItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateBasketItemResponse {
    #[oai(status = 200)]
    Ok(Json<BasketItemResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveBasketItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
