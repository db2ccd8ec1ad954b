use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct ConfirmOrderParams {
    pub user_id: UserId,
    pub order_id: Option<i64>,
    pub code: Option<String>,
}

#[async_trait]
pub trait ConfirmOrderUseCase: Send + Sync {
    async fn execute(&self, params: ConfirmOrderParams) -> Result<Order, OrderError>;
}
