use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Supplier;

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Supplier>, RepositoryError>;
    async fn set_accepts_orders(
        &self,
        supplier_id: i64,
        accepts_orders: bool,
    ) -> Result<Supplier, RepositoryError>;
}
