use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::remove_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveBasketItemUseCase for RemoveBasketItemUseCaseImpl {
    async fn execute(&self, params: RemoveBasketItemParams) -> Result<(), BasketError> {
        self.logger
            .info(&format!("Removing basket item: {}", params.item_id));

        // Ownership check: foreign items look exactly like missing ones
        self.repository
            .get_line(params.item_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BasketError::ItemNotFound,
                other => BasketError::Repository(other),
            })?;

        self.repository
            .delete_item(params.item_id, &params.user_id)
            .await?;

        self.logger
            .info(&format!("Basket item removed: {}", params.item_id));
        Ok(())
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

    #[tokio::test]
    async fn should_delete_owned_item() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line().returning(|item_id, _| {
            Ok(BasketLine {
                item: BasketItem {
                    id: item_id,
                    basket_id: 1,
                    product_id: 7,
                    quantity: 2,
                },
                product: Product {
                    id: 7,
                    name: "Toaster".to_string(),
                    category_id: 1,
                    supplier_id: 1,
                    price: BigDecimal::from(40),
                    quantity: 9,
                    external_id: None,
                },
                supplier: Supplier {
                    id: 1,
                    user_id: UserId::new("supplier-1"),
                    name: "Svyaznoy".to_string(),
                    accepts_orders: true,
                },
            })
        });
        repo.expect_delete_item().times(1).returning(|_, _| Ok(()));

        let use_case = RemoveBasketItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveBasketItemParams {
                user_id: UserId::new("buyer-1"),
                item_id: 11,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_missing() {
        let mut repo = MockBasketRepo::new();
        repo.expect_get_line()
            .returning(|_, _| Err(RepositoryError::NotFound));
        repo.expect_delete_item().never();

        let use_case = RemoveBasketItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveBasketItemParams {
                user_id: UserId::new("buyer-1"),
                item_id: 11,
            })
            .await;

        assert!(matches!(result, Err(BasketError::ItemNotFound)));
    }
}
