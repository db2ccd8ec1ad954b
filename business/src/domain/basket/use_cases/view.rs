use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::shared::value_objects::UserId;

pub struct ViewBasketParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ViewBasketUseCase: Send + Sync {
    async fn execute(&self, params: ViewBasketParams) -> Result<Basket, BasketError>;
}
