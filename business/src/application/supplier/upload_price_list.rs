use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::price_list::PriceListImport;
use crate::domain::catalog::repository::PriceListRepository;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::upload_price_list::{
    UploadPriceListParams, UploadPriceListUseCase,
};

pub struct UploadPriceListUseCaseImpl {
    pub supplier_repository: Arc<dyn SupplierRepository>,
    pub price_list_repository: Arc<dyn PriceListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadPriceListUseCase for UploadPriceListUseCaseImpl {
    async fn execute(
        &self,
        params: UploadPriceListParams,
    ) -> Result<PriceListImport, SupplierError> {
        let supplier = self
            .supplier_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(SupplierError::NotASupplier)?;

        let price_list = params.document.validate().inspect_err(|e| {
            self.logger.warn(&format!(
                "Price list from supplier {} rejected: {}",
                supplier.id,
                e.describe()
            ))
        })?;

        self.logger.info(&format!(
            "Applying price list for supplier {}: {} categories, {} goods",
            supplier.id,
            price_list.categories.len(),
            price_list.goods.len()
        ));

        let import = self
            .price_list_repository
            .apply(supplier.id, &price_list)
            .await?;

        self.logger.info(&format!(
            "Price list applied for supplier {}: {} created, {} updated",
            supplier.id, import.created, import.updated
        ));
        Ok(import)
    }
}
