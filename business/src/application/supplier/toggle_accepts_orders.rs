use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::toggle_accepts_orders::{
    ToggleAcceptsOrdersParams, ToggleAcceptsOrdersUseCase,
};

pub struct ToggleAcceptsOrdersUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleAcceptsOrdersUseCase for ToggleAcceptsOrdersUseCaseImpl {
    async fn execute(&self, params: ToggleAcceptsOrdersParams) -> Result<Supplier, SupplierError> {
        let supplier = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(SupplierError::NotASupplier)?;

        let accepts_orders = params
            .accepts_orders
            .ok_or(SupplierError::AcceptsOrdersMissing)?;

        self.logger.info(&format!(
            "Supplier {} accepts_orders -> {}",
            supplier.id, accepts_orders
        ));

        let updated = self
            .repository
            .set_accepts_orders(supplier.id, accepts_orders)
            .await?;

        Ok(updated)
    }
}
