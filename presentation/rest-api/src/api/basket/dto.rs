use poem_openapi::Object;

use business::domain::basket::model::{Basket, BasketItem, BasketLine};

#[derive(Debug, Clone, Object)]
pub struct AddBasketItemRequest {
    /// Product to add
    pub product_id: i64,
    /// Units to add (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateBasketItemRequest {
    /// New quantity; zero or less removes the item
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct BasketItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<BasketItem> for BasketItemResponse {
    fn from(item: BasketItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketLineResponse {
    /// Basket item id, used by update and remove
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub supplier_name: String,
    /// Unit price as a decimal string
    pub price: String,
    pub quantity: i64,
    /// Unit price times quantity
    pub line_price: String,
}

impl From<BasketLine> for BasketLineResponse {
    fn from(line: BasketLine) -> Self {
        let line_price = line.line_price().to_string();
        Self {
            id: line.item.id,
            product_id: line.product.id,
            product_name: line.product.name,
            supplier_name: line.supplier.name,
            price: line.product.price.to_string(),
            quantity: line.item.quantity,
            line_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketResponse {
    pub id: i64,
    pub items: Vec<BasketLineResponse>,
    pub total_quantity: i64,
    pub total_price: String,
}

impl From<Basket> for BasketResponse {
    fn from(basket: Basket) -> Self {
        let total_quantity = basket.total_quantity();
        let total_price = basket.total_price().to_string();
        Self {
            id: basket.id,
            items: basket.lines.into_iter().map(Into::into).collect(),
            total_quantity,
            total_price,
        }
    }
}
