use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::QuantityUpdate;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateBasketItemQuantityParams {
    pub user_id: UserId,
    pub item_id: i64,
    pub quantity: Option<i64>,
}

#[async_trait]
pub trait UpdateBasketItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateBasketItemQuantityParams,
    ) -> Result<QuantityUpdate, BasketError>;
}
