use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::UserId;

pub struct AddBasketItemParams {
    pub user_id: UserId,
    pub product_id: i64,
    /// Defaults to 1 when absent.
    pub quantity: Option<i64>,
}

#[async_trait]
pub trait AddBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketItem, BasketError>;
}
