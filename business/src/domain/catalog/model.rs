use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A supplier's offer. `quantity` is stock on hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub supplier_id: i64,
    pub price: BigDecimal,
    pub quantity: i64,
    pub external_id: Option<String>,
}

impl Product {
    pub fn has_stock_for(&self, requested: i64) -> bool {
        self.quantity >= requested
    }
}
