use crate::domain::catalog::errors::PriceListError;

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier.not_a_supplier")]
    NotASupplier,
    #[error("supplier.accepts_orders_missing")]
    AcceptsOrdersMissing,
    #[error("supplier.invalid_price_list")]
    InvalidPriceList(#[from] PriceListError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
