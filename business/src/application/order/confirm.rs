use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::confirm::{ConfirmOrderParams, ConfirmOrderUseCase};

pub struct ConfirmOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmOrderUseCase for ConfirmOrderUseCaseImpl {
    async fn execute(&self, params: ConfirmOrderParams) -> Result<Order, OrderError> {
        let (order_id, code) = match (params.order_id, params.code) {
            (Some(order_id), Some(code)) => (order_id, code),
            _ => return Err(OrderError::ConfirmationFieldsMissing),
        };
        if order_id < 0 {
            return Err(OrderError::OrderIdMalformed);
        }

        self.logger.info(&format!(
            "Confirming order {} for user {}",
            order_id, params.user_id
        ));

        self.repository
            .get_for_user(order_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let pending = self
            .repository
            .find_confirmation_code(order_id)
            .await?
            .ok_or(OrderError::NoPendingCode)?;

        if pending.is_expired_at(Utc::now()) {
            self.repository.delete_confirmation_code(order_id).await?;
            self.logger
                .info(&format!("Expired confirmation code removed for order {}", order_id));
            return Err(OrderError::CodeExpired);
        }

        if !pending.matches(&code) {
            self.logger
                .warn(&format!("Wrong confirmation code submitted for order {}", order_id));
            return Err(OrderError::CodeMismatch);
        }

        // A concurrent confirm may have consumed the code since it was read.
        // The stock CHECK rejects an oversell and the whole confirmation rolls back.
        let order = self
            .repository
            .confirm(order_id, &params.user_id, &code)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolated => {
                    self.logger.warn(&format!(
                        "Stock no longer covers order {}, confirmation rolled back",
                        order_id
                    ));
                    OrderError::StockChanged
                }
                other => OrderError::Repository(other),
            })?
            .ok_or(OrderError::NoPendingCode)?;

        self.logger.info(&format!("Order {} confirmed", order.id));
        Ok(order)
    }
}
