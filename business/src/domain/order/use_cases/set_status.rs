use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderStatus};

pub struct SetOrderStatusParams {
    pub order_id: i64,
    pub status: OrderStatus,
    pub actor_is_staff: bool,
}

#[async_trait]
pub trait SetOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: SetOrderStatusParams) -> Result<Order, OrderError>;
}
