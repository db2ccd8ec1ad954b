/// Rejections raised while validating a supplier price list.
/// Nothing is written when any of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum PriceListError {
    #[error("price_list.goods_missing")]
    GoodsMissing,
    #[error("price_list.invalid_category_id")]
    InvalidCategoryId { category: String },
    #[error("price_list.category_not_found")]
    CategoryNotFound { category: String },
    #[error("price_list.name_empty")]
    NameEmpty { external_id: String },
    #[error("price_list.invalid_external_id")]
    InvalidExternalId { name: String },
    #[error("price_list.invalid_quantity")]
    InvalidQuantity { name: String, external_id: String },
    #[error("price_list.negative_quantity")]
    NegativeQuantity { name: String, external_id: String },
    #[error("price_list.invalid_price")]
    InvalidPrice { name: String, external_id: String },
    #[error("price_list.negative_price")]
    NegativePrice { name: String, external_id: String },
}

impl PriceListError {
    /// Human readable explanation naming the offending entry.
    pub fn describe(&self) -> String {
        match self {
            PriceListError::GoodsMissing => {
                "Invalid document: an object with a \"goods\" field is expected".to_string()
            }
            PriceListError::InvalidCategoryId { category } => {
                format!("Category \"{category}\" must have an integer id")
            }
            PriceListError::CategoryNotFound { category } => {
                format!("Category with id {category} not found")
            }
            PriceListError::NameEmpty { external_id } => {
                format!("Good (ID: {external_id}) must have a name")
            }
            PriceListError::InvalidExternalId { name } => {
                format!("Good \"{name}\" must have a string or integer id")
            }
            PriceListError::InvalidQuantity { name, external_id } => {
                format!("Quantity of \"{name}\" (ID: {external_id}) must be an integer")
            }
            PriceListError::NegativeQuantity { name, external_id } => {
                format!("Quantity of \"{name}\" (ID: {external_id}) cannot be negative")
            }
            PriceListError::InvalidPrice { name, external_id } => {
                format!(
                    "Price of \"{name}\" (ID: {external_id}) must be a number with at most 2 decimal places"
                )
            }
            PriceListError::NegativePrice { name, external_id } => {
                format!("Price of \"{name}\" (ID: {external_id}) cannot be negative")
            }
        }
    }
}
