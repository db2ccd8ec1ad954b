#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.product_not_found")]
    ProductNotFound,
    #[error("basket.item_not_found")]
    ItemNotFound,
    #[error("basket.quantity_missing")]
    QuantityMissing,
    #[error("basket.invalid_quantity")]
    InvalidQuantity,
    #[error("basket.quantity_too_large")]
    QuantityTooLarge { max: i64 },
    #[error("basket.insufficient_stock")]
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
