use async_trait::async_trait;

use crate::domain::catalog::price_list::{PriceListImport, RawPriceList};
use crate::domain::shared::value_objects::UserId;
use crate::domain::supplier::errors::SupplierError;

pub struct UploadPriceListParams {
    pub user_id: UserId,
    pub document: RawPriceList,
}

#[async_trait]
pub trait UploadPriceListUseCase: Send + Sync {
    async fn execute(&self, params: UploadPriceListParams)
    -> Result<PriceListImport, SupplierError>;
}
