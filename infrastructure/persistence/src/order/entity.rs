use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::order::confirmation::ConfirmationCode;
use business::domain::order::model::{Order, OrderItem, OrderStatus};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: i64,
    pub user_id: String,
    pub address_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItem>) -> Result<Order, RepositoryError> {
        let status = self.status.parse::<OrderStatus>().map_err(|e| {
            tracing::error!(order_id = self.id, "{}", e);
            RepositoryError::DatabaseError
        })?;

        Ok(Order {
            id: self.id,
            user_id: UserId::new(self.user_id),
            address_id: self.address_id,
            status,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ConfirmationCodeEntity {
    pub order_id: i64,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl ConfirmationCodeEntity {
    pub fn into_domain(self) -> ConfirmationCode {
        ConfirmationCode {
            order_id: self.order_id,
            code: self.code,
            expires_at: self.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(status: &str) -> OrderEntity {
        let now = Utc::now();
        OrderEntity {
            id: 1,
            user_id: "buyer-1".to_string(),
            address_id: Some(3),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_parse_stored_status() {
        let order = entity("assembled").into_domain(vec![]).unwrap();

        assert_eq!(order.status, OrderStatus::Assembled);
        assert_eq!(order.user_id.as_str(), "buyer-1");
    }

    #[test]
    fn should_reject_unknown_stored_status() {
        assert!(matches!(
            entity("lost").into_domain(vec![]),
            Err(RepositoryError::DatabaseError)
        ));
    }
}
