use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Object)]
pub struct CreateOrderRequest {
    /// One of the caller's saved delivery addresses
    #[oai(skip_serializing_if_is_none)]
    pub delivery_address_id: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct ConfirmOrderRequest {
    #[oai(skip_serializing_if_is_none)]
    pub order_id: Option<i64>,
    /// Code delivered by email after checkout
    #[oai(skip_serializing_if_is_none)]
    pub confirmation_code: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SetOrderStatusRequest {
    /// One of `assembled`, `sent`, `delivered`, `canceled`
    pub status: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: i64,
    pub status: String,
    #[oai(skip_serializing_if_is_none)]
    pub delivery_address_id: Option<i64>,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status.to_string(),
            delivery_address_id: order.address_id,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
