use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::set_status::{SetOrderStatusParams, SetOrderStatusUseCase};

pub struct SetOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetOrderStatusUseCase for SetOrderStatusUseCaseImpl {
    async fn execute(&self, params: SetOrderStatusParams) -> Result<Order, OrderError> {
        if !params.actor_is_staff {
            return Err(OrderError::Forbidden);
        }
        if !params.status.is_manually_settable() {
            return Err(OrderError::StatusNotSettable(params.status));
        }

        self.logger.info(&format!(
            "Setting order {} status to {}",
            params.order_id, params.status
        ));

        let order = self
            .repository
            .set_status(params.order_id, params.status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // The order has left `new`, so its code must no longer confirm it
        self.repository.delete_confirmation_code(order.id).await?;

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::confirmation::ConfirmationCode;
    use crate::domain::order::model::{OrderStatus, PendingOrder};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

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
    async fn should_set_status_for_staff() {
        let mut repo = MockOrderRepo::new();
        repo.expect_set_status()
            .withf(|id, status| *id == 3 && *status == OrderStatus::Sent)
            .times(1)
            .returning(|id, status| {
                let now = Utc::now();
                Ok(Order {
                    id,
                    user_id: UserId::new("buyer-1"),
                    address_id: Some(1),
                    status,
                    items: vec![],
                    created_at: now,
                    updated_at: now,
                })
            });
        repo.expect_delete_confirmation_code()
            .withf(|order_id| *order_id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SetOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetOrderStatusParams {
                order_id: 3,
                status: OrderStatus::Sent,
                actor_is_staff: true,
            })
            .await;

        assert_eq!(result.unwrap().status, OrderStatus::Sent);
    }

    #[tokio::test]
    async fn should_forbid_non_staff() {
        let mut repo = MockOrderRepo::new();
        repo.expect_set_status().never();

        let use_case = SetOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetOrderStatusParams {
                order_id: 3,
                status: OrderStatus::Sent,
                actor_is_staff: false,
            })
            .await;

        assert!(matches!(result, Err(OrderError::Forbidden)));
    }

    #[tokio::test]
    async fn should_refuse_checkout_statuses() {
        let use_case = SetOrderStatusUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            logger: mock_logger(),
        };

        for status in [OrderStatus::New, OrderStatus::Confirmed] {
            let result = use_case
                .execute(SetOrderStatusParams {
                    order_id: 3,
                    status,
                    actor_is_staff: true,
                })
                .await;

            assert!(matches!(result, Err(OrderError::StatusNotSettable(s)) if s == status));
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut repo = MockOrderRepo::new();
        repo.expect_set_status()
            .returning(|_, _| Err(RepositoryError::NotFound));
        repo.expect_delete_confirmation_code().never();

        let use_case = SetOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetOrderStatusParams {
                order_id: 999,
                status: OrderStatus::Canceled,
                actor_is_staff: true,
            })
            .await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }
}
