use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::confirmation::ConfirmationCode;
use super::model::{Order, OrderStatus, PendingOrder};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes order, items and confirmation code atomically.
    async fn create_pending(&self, order: &PendingOrder) -> Result<Order, RepositoryError>;
    /// `NotFound` unless the order belongs to `user_id`.
    async fn get_for_user(&self, id: i64, user_id: &UserId) -> Result<Order, RepositoryError>;
    async fn find_confirmation_code(
        &self,
        order_id: i64,
    ) -> Result<Option<ConfirmationCode>, RepositoryError>;
    async fn delete_confirmation_code(&self, order_id: i64) -> Result<(), RepositoryError>;
    /// Commits a confirmation as one unit: consumes the code, decrements stock for every
    /// item, marks the order confirmed and empties the user's basket.
    /// Returns `None` when the code was already consumed.
    async fn confirm(
        &self,
        order_id: i64,
        user_id: &UserId,
        code: &str,
    ) -> Result<Option<Order>, RepositoryError>;
    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<Order, RepositoryError>;
    /// Orders with at least one item from the supplier, newest first.
    async fn get_by_supplier(&self, supplier_id: i64) -> Result<Vec<Order>, RepositoryError>;
}
