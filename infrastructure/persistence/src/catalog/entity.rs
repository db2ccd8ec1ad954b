use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::catalog::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub supplier_id: i64,
    pub price: BigDecimal,
    pub quantity: i64,
    pub external_id: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
            price: self.price,
            quantity: self.quantity,
            external_id: self.external_id,
        }
    }
}

/// Row returned by the product upsert; `inserted` is false when an existing row was updated.
#[derive(Debug, FromRow)]
pub struct UpsertedProductEntity {
    pub id: i64,
    pub inserted: bool,
}
