use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::view::{ViewBasketParams, ViewBasketUseCase};
use crate::domain::logger::Logger;

pub struct ViewBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewBasketUseCase for ViewBasketUseCaseImpl {
    async fn execute(&self, params: ViewBasketParams) -> Result<Basket, BasketError> {
        self.logger
            .debug(&format!("Loading basket for user: {}", params.user_id));

        let basket = self.repository.get_or_create(&params.user_id).await?;

        self.logger.debug(&format!(
            "Basket {} holds {} lines",
            basket.id,
            basket.lines.len()
        ));
        Ok(basket)
    }
}
