use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::get_orders::{
    GetSupplierOrdersParams, GetSupplierOrdersUseCase,
};

pub struct GetSupplierOrdersUseCaseImpl {
    pub supplier_repository: Arc<dyn SupplierRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSupplierOrdersUseCase for GetSupplierOrdersUseCaseImpl {
    async fn execute(&self, params: GetSupplierOrdersParams) -> Result<Vec<Order>, SupplierError> {
        let supplier = self
            .supplier_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(SupplierError::NotASupplier)?;

        let orders = self.order_repository.get_by_supplier(supplier.id).await?;
        self.logger.debug(&format!(
            "Supplier {} has {} orders",
            supplier.id,
            orders.len()
        ));

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::confirmation::ConfirmationCode;
    use crate::domain::order::model::{OrderStatus, PendingOrder};
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::supplier::model::Supplier;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub SupplierRepo {}

        #[async_trait]
        impl SupplierRepository for SupplierRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Supplier>, RepositoryError>;
            async fn set_accepts_orders(&self, supplier_id: i64, accepts_orders: bool) -> Result<Supplier, RepositoryError>;
        }
    }

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn create_pending(&self, order: &PendingOrder) -> Result<Order, RepositoryError>;
            async fn get_for_user(&self, id: i64, user_id: &UserId) -> Result<Order, RepositoryError>;
            async fn find_confirmation_code(&self, order_id: i64) -> Result<Option<ConfirmationCode>, RepositoryError>;
            async fn delete_confirmation_code(&self, order_id: i64) -> Result<(), RepositoryError>;
            async fn confirm(&self, order_id: i64, user_id: &UserId, code: &str) -> Result<Option<Order>, RepositoryError>;
            async fn set_status(&self, id: i64, status: OrderStatus) -> Result<Order, RepositoryError>;
            async fn get_by_supplier(&self, supplier_id: i64) -> Result<Vec<Order>, RepositoryError>;
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
    async fn should_list_orders_containing_supplier_goods() {
        let mut suppliers = MockSupplierRepo::new();
        suppliers.expect_find_by_user().returning(|user_id| {
            Ok(Some(Supplier {
                id: 4,
                user_id: user_id.clone(),
                name: "Svyaznoy".to_string(),
                accepts_orders: true,
            }))
        });
        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_supplier()
            .withf(|supplier_id| *supplier_id == 4)
            .returning(|_| {
                let now = Utc::now();
                Ok(vec![Order {
                    id: 9,
                    user_id: UserId::new("buyer-1"),
                    address_id: Some(2),
                    status: OrderStatus::Confirmed,
                    items: vec![],
                    created_at: now,
                    updated_at: now,
                }])
            });

        let use_case = GetSupplierOrdersUseCaseImpl {
            supplier_repository: Arc::new(suppliers),
            order_repository: Arc::new(orders),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSupplierOrdersParams {
                user_id: UserId::new("supplier-1"),
            })
            .await;

        let orders = result.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 9);
    }

    #[tokio::test]
    async fn should_reject_non_supplier() {
        let mut suppliers = MockSupplierRepo::new();
        suppliers.expect_find_by_user().returning(|_| Ok(None));
        let mut orders = MockOrderRepo::new();
        orders.expect_get_by_supplier().never();

        let use_case = GetSupplierOrdersUseCaseImpl {
            supplier_repository: Arc::new(suppliers),
            order_repository: Arc::new(orders),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSupplierOrdersParams {
                user_id: UserId::new("buyer-1"),
            })
            .await;

        assert!(matches!(result, Err(SupplierError::NotASupplier)));
    }
}
