use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::basket::model::{BasketItem, BasketLine};
use business::domain::catalog::model::Product;
use business::domain::shared::value_objects::UserId;
use business::domain::supplier::model::Supplier;

#[derive(Debug, FromRow)]
pub struct BasketEntity {
    pub id: i64,
    pub user_id: String,
}

#[derive(Debug, FromRow)]
pub struct BasketItemEntity {
    pub id: i64,
    pub basket_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl BasketItemEntity {
    pub fn into_domain(self) -> BasketItem {
        BasketItem {
            id: self.id,
            basket_id: self.basket_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

/// One basket item joined with its product and the product's supplier.
#[derive(Debug, FromRow)]
pub struct BasketLineEntity {
    pub item_id: i64,
    pub basket_id: i64,
    pub item_quantity: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category_id: i64,
    pub price: BigDecimal,
    pub stock: i64,
    pub external_id: Option<String>,
    pub supplier_id: i64,
    pub supplier_user_id: String,
    pub supplier_name: String,
    pub accepts_orders: bool,
}

impl BasketLineEntity {
    pub fn into_domain(self) -> BasketLine {
        BasketLine {
            item: BasketItem {
                id: self.item_id,
                basket_id: self.basket_id,
                product_id: self.product_id,
                quantity: self.item_quantity,
            },
            product: Product {
                id: self.product_id,
                name: self.product_name,
                category_id: self.category_id,
                supplier_id: self.supplier_id,
                price: self.price,
                quantity: self.stock,
                external_id: self.external_id,
            },
            supplier: Supplier {
                id: self.supplier_id,
                user_id: UserId::new(self.supplier_user_id),
                name: self.supplier_name,
                accepts_orders: self.accepts_orders,
            },
        }
    }
}
