use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

pub struct ToggleAcceptsOrdersParams {
    pub user_id: UserId,
    pub accepts_orders: Option<bool>,
}

#[async_trait]
pub trait ToggleAcceptsOrdersUseCase: Send + Sync {
    async fn execute(&self, params: ToggleAcceptsOrdersParams) -> Result<Supplier, SupplierError>;
}
