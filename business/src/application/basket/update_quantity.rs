use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{MAX_ITEM_QUANTITY, QuantityUpdate};
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::update_quantity::{
    UpdateBasketItemQuantityParams, UpdateBasketItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateBasketItemQuantityUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBasketItemQuantityUseCase for UpdateBasketItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateBasketItemQuantityParams,
    ) -> Result<QuantityUpdate, BasketError> {
        self.logger
            .info(&format!("Updating basket item: {}", params.item_id));

        let line = self
            .repository
            .get_line(params.item_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BasketError::ItemNotFound,
                other => BasketError::Repository(other),
            })?;

        let quantity = params.quantity.ok_or(BasketError::QuantityMissing)?;

        if quantity <= 0 {
            self.repository
                .delete_item(line.item.id, &params.user_id)
                .await?;
            self.logger
                .info(&format!("Basket item {} removed", line.item.id));
            return Ok(QuantityUpdate::Removed);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(BasketError::QuantityTooLarge {
                max: MAX_ITEM_QUANTITY,
            });
        }

        if !line.product.has_stock_for(quantity) {
            return Err(BasketError::InsufficientStock {
                product: line.product.name,
                requested: quantity,
                available: line.product.quantity,
            });
        }

        let item = self
            .repository
            .set_item_quantity(line.item.id, quantity)
            .await?;

        self.logger.info(&format!(
            "Basket item {} quantity set to {}",
            item.id, item.quantity
        ));
        Ok(QuantityUpdate::Updated(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::{Basket, BasketItem, BasketLine};
    use crate::domain::catalog::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::supplier::model::Supplier;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub BasketRepo {}

        #[async_trait]
        impl BasketRepository for BasketRepo {
            async fn get_or_create(&self, user_id: &UserId) -> Result<Basket, RepositoryError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError>;
            async fn add_item(&self, basket_id: i64, product_id: i64, quantity: i64) -> Result<BasketItem, RepositoryError>;
            async fn get_line(&self, item_id: i64, user_id: &UserId) -> Result<BasketLine, RepositoryError>;
            async fn set_item_quantity(&self, item_id: i64, quantity: i64) -> Result<BasketItem, RepositoryError>;
            async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn line(item_id: i64, quantity: i64, stock: i64) -> BasketLine {
        BasketLine {
            item: BasketItem {
                id: item_id,
                basket_id: 1,
                product_id: 7,
                quantity,
            },
            product: Product {
                id: 7,
                name: "Toaster".to_string(),
                category_id: 1,
                supplier_id: 1,
                price: BigDecimal::from(40),
                quantity: stock,
                external_id: None,
            },
            supplier: Supplier {
                id: 1,
                user_id: UserId::new("supplier-1"),
                name: "Svyaznoy".to_string(),
                accepts_orders: true,
            },
        }
    }

    fn use_case_with(repo: MockBasketRepo) -> UpdateBasketItemQuantityUseCaseImpl {
        UpdateBasketItemQuantityUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    fn params(item_id: i64, quantity: Option<i64>) -> UpdateBasketItemQuantityParams {
        UpdateBasketItemQuantityParams {
            user_id: UserId::new("buyer-1"),
            item_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_update_quantity_within_stock() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|item_id, _| Ok(line(item_id, 1, 5)));
        repo.expect_set_item_quantity()
            .returning(|item_id, quantity| {
                Ok(BasketItem {
                    id: item_id,
                    basket_id: 1,
                    product_id: 7,
                    quantity,
                })
            });

        let result = use_case_with(repo).execute(params(11, Some(5))).await.unwrap();

        match result {
            QuantityUpdate::Updated(item) => assert_eq!(item.quantity, 5),
            QuantityUpdate::Removed => panic!("item should have been kept"),
        }
    }

    #[tokio::test]
    async fn should_reject_quantity_above_stock() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|item_id, _| Ok(line(item_id, 1, 5)));
        repo.expect_set_item_quantity().never();

        let result = use_case_with(repo).execute(params(11, Some(6))).await;

        match result {
            Err(BasketError::InsufficientStock {
                requested,
                available,
                ..
            }) => {
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_quantity_above_item_bound() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|item_id, _| Ok(line(item_id, 1, i64::MAX)));
        repo.expect_set_item_quantity().never();

        let result = use_case_with(repo)
            .execute(params(11, Some(MAX_ITEM_QUANTITY + 1)))
            .await;

        assert!(matches!(result, Err(BasketError::QuantityTooLarge { .. })));
    }

    #[tokio::test]
    async fn should_return_item_not_found_for_foreign_item() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = use_case_with(repo).execute(params(11, Some(0))).await;

        assert!(matches!(result, Err(BasketError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_require_quantity() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|item_id, _| Ok(line(item_id, 1, 5)));

        let result = use_case_with(repo).execute(params(11, None)).await;

        assert!(matches!(result, Err(BasketError::QuantityMissing)));
    }

    proptest! {
        #[test]
        fn should_remove_item_for_any_non_positive_quantity(quantity in i64::MIN..=0) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let mut repo = MockBasketRepo::new();
            // Stock of zero proves the removal branch never looks at availability.
            repo.expect_get_line()
                .returning(|item_id, _| Ok(line(item_id, 3, 0)));
            repo.expect_delete_item().times(1).returning(|_, _| Ok(()));
            repo.expect_set_item_quantity().never();

            let result = runtime.block_on(use_case_with(repo).execute(params(11, Some(quantity))));

            prop_assert!(matches!(result, Ok(QuantityUpdate::Removed)));
        }
    }
}
