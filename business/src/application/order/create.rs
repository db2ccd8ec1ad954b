use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::address::repository::AddressRepository;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::logger::Logger;
use crate::domain::order::confirmation::CheckoutConfig;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderItem, Order, PendingOrder};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::{Notification, NotificationTemplate, OrderNotifier};
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};

pub struct CreateOrderUseCaseImpl {
    pub basket_repository: Arc<dyn BasketRepository>,
    pub address_repository: Arc<dyn AddressRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub notifier: Arc<dyn OrderNotifier>,
    pub config: CheckoutConfig,
    pub logger: Arc<dyn Logger>,
}

/// Every line must come from a supplier taking orders and fit the stock on hand.
/// Lines are checked in basket order and the first failure wins.
fn validate_lines(basket: &Basket) -> Result<(), OrderError> {
    for line in &basket.lines {
        if !line.supplier.accepts_orders {
            return Err(OrderError::SupplierUnavailable {
                supplier: line.supplier.name.clone(),
                product: line.product.name.clone(),
            });
        }
        if !line.product.has_stock_for(line.item.quantity) {
            return Err(OrderError::InsufficientStock {
                product: line.product.name.clone(),
                requested: line.item.quantity,
                available: line.product.quantity,
            });
        }
    }
    Ok(())
}

impl CreateOrderUseCaseImpl {
    async fn send_confirmation_request(
        &self,
        order: &Order,
        pending: &PendingOrder,
        recipient: Option<String>,
    ) {
        let Some(recipient) = recipient else {
            self.logger.warn(&format!(
                "No email known for user {}, confirmation code for order {} not sent",
                order.user_id, order.id
            ));
            return;
        };

        let notification = Notification {
            template: NotificationTemplate::OrderConfirmationRequest,
            recipient,
            payload: json!({
                "order_id": order.id,
                "confirmation_code": pending.code,
                "expires_at": pending.code_expires_at.to_rfc3339(),
            }),
        };

        if let Err(e) = self.notifier.notify(notification).await {
            self.logger.warn(&format!(
                "Confirmation request for order {} not delivered: {}",
                order.id, e
            ));
        }
    }
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Creating order for user: {}", params.user_id));

        let basket = self
            .basket_repository
            .find_by_user(&params.user_id)
            .await?
            .filter(|basket| !basket.is_empty())
            .ok_or(OrderError::EmptyBasket)?;

        validate_lines(&basket)?;

        let address_id = params
            .delivery_address_id
            .ok_or(OrderError::AddressMissing)?;
        if address_id < 0 {
            return Err(OrderError::AddressMalformed);
        }
        self.address_repository
            .find_for_user(address_id, &params.user_id)
            .await?
            .ok_or(OrderError::AddressNotFound)?;

        // Stock stays untouched until the code is confirmed.
        let pending = PendingOrder {
            user_id: params.user_id,
            address_id,
            items: basket
                .lines
                .iter()
                .map(|line| NewOrderItem {
                    product_id: line.product.id,
                    quantity: line.item.quantity,
                })
                .collect(),
            code: self.config.generate_code(),
            code_expires_at: self.config.expires_at(Utc::now()),
        };

        let order = self.order_repository.create_pending(&pending).await?;
        self.logger.info(&format!(
            "Order {} created with {} items, awaiting confirmation",
            order.id,
            order.items.len()
        ));

        self.send_confirmation_request(&order, &pending, params.recipient_email)
            .await;

        Ok(order)
    }
}
