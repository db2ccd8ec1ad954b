use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::DeliveryAddress;
use crate::domain::shared::value_objects::UserId;

pub struct CreateAddressParams {
    pub user_id: UserId,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
}

#[async_trait]
pub trait CreateAddressUseCase: Send + Sync {
    async fn execute(&self, params: CreateAddressParams) -> Result<DeliveryAddress, AddressError>;
}
