use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::price_list::{PriceList, PriceListImport};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
}

/// Writes a validated price list for one supplier as a single all-or-nothing unit.
#[async_trait]
pub trait PriceListRepository: Send + Sync {
    async fn apply(
        &self,
        supplier_id: i64,
        price_list: &PriceList,
    ) -> Result<PriceListImport, RepositoryError>;
}
