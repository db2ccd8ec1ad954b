use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{BasketItem, MAX_ITEM_QUANTITY};
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddBasketItemUseCase for AddBasketItemUseCaseImpl {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketItem, BasketError> {
        self.logger.info(&format!(
            "Adding product {} to basket of user {}",
            params.product_id, params.user_id
        ));

        let quantity = params.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(BasketError::InvalidQuantity);
        }
        if quantity > MAX_ITEM_QUANTITY {
            return Err(BasketError::QuantityTooLarge {
                max: MAX_ITEM_QUANTITY,
            });
        }

        // Stock is not checked here; checkout and explicit updates enforce it.
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BasketError::ProductNotFound,
                other => BasketError::Repository(other),
            })?;

        let basket = self.repository.get_or_create(&params.user_id).await?;
        let held = basket
            .lines
            .iter()
            .find(|line| line.item.product_id == product.id)
            .map_or(0, |line| line.item.quantity);
        if held + quantity > MAX_ITEM_QUANTITY {
            return Err(BasketError::QuantityTooLarge {
                max: MAX_ITEM_QUANTITY,
            });
        }

        // A concurrent add can still push the row past the bound; the CHECK constraint catches it
        let item = self
            .repository
            .add_item(basket.id, product.id, quantity)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolated => BasketError::QuantityTooLarge {
                    max: MAX_ITEM_QUANTITY,
                },
                other => BasketError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Basket item {} now holds {} of product {}",
            item.id, item.quantity, item.product_id
        ));
        Ok(item)
    }
}
