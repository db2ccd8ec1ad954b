use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{DeliveryAddress, NewDeliveryAddress};

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<DeliveryAddress>, RepositoryError>;
    /// Returns the address only when it belongs to `user_id`.
    async fn find_for_user(
        &self,
        id: i64,
        user_id: &UserId,
    ) -> Result<Option<DeliveryAddress>, RepositoryError>;
    async fn create(&self, address: &NewDeliveryAddress)
    -> Result<DeliveryAddress, RepositoryError>;
}
