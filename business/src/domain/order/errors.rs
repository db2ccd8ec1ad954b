use super::model::OrderStatus;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_basket")]
    EmptyBasket,
    #[error("order.supplier_unavailable")]
    SupplierUnavailable { supplier: String, product: String },
    #[error("order.insufficient_stock")]
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },
    #[error("order.address_missing")]
    AddressMissing,
    #[error("order.address_malformed")]
    AddressMalformed,
    #[error("order.address_not_found")]
    AddressNotFound,
    #[error("order.confirmation_fields_missing")]
    ConfirmationFieldsMissing,
    #[error("order.order_id_malformed")]
    OrderIdMalformed,
    #[error("order.not_found")]
    NotFound,
    #[error("order.no_pending_code")]
    NoPendingCode,
    #[error("order.code_expired")]
    CodeExpired,
    #[error("order.code_mismatch")]
    CodeMismatch,
    /// Stock fell below the ordered amount between checkout and confirmation.
    #[error("order.stock_changed")]
    StockChanged,
    #[error("order.forbidden")]
    Forbidden,
    #[error("order.status_not_settable")]
    StatusNotSettable(OrderStatus),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
