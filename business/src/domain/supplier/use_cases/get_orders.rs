use async_trait::async_trait;

use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;
use crate::domain::supplier::errors::SupplierError;

pub struct GetSupplierOrdersParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetSupplierOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetSupplierOrdersParams) -> Result<Vec<Order>, SupplierError>;
}
