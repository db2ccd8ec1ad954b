use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct CreateOrderParams {
    pub user_id: UserId,
    /// Where the confirmation code is sent; skipped when unknown.
    pub recipient_email: Option<String>,
    pub delivery_address_id: Option<i64>,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
