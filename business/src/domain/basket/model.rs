use bigdecimal::BigDecimal;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::UserId;
use crate::domain::supplier::model::Supplier;

/// Most units of one product a basket item may hold.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub id: i64,
    pub basket_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// A basket item together with the live product and supplier it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    pub item: BasketItem,
    pub product: Product,
    pub supplier: Supplier,
}

impl BasketLine {
    pub fn line_price(&self) -> BigDecimal {
        &self.product.price * BigDecimal::from(self.item.quantity)
    }
}

/// Per-user cart. Lines are kept in insertion order (ascending item id).
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub id: i64,
    pub user_id: UserId,
    pub lines: Vec<BasketLine>,
}

impl Basket {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |total, line| total.saturating_add(line.item.quantity))
    }

    pub fn total_price(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::from(0), |total, line| total + line.line_price())
    }
}

/// Result of an explicit quantity change: a non-positive quantity removes the item.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    Updated(BasketItem),
    Removed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(item_id: i64, price: &str, quantity: i64) -> BasketLine {
        BasketLine {
            item: BasketItem {
                id: item_id,
                basket_id: 1,
                product_id: item_id * 10,
                quantity,
            },
            product: Product {
                id: item_id * 10,
                name: format!("Product {}", item_id),
                category_id: 1,
                supplier_id: 1,
                price: BigDecimal::from_str(price).unwrap(),
                quantity: 100,
                external_id: None,
            },
            supplier: Supplier {
                id: 1,
                user_id: UserId::new("supplier-1"),
                name: "Svyaznoy".to_string(),
                accepts_orders: true,
            },
        }
    }

    #[test]
    fn should_sum_quantities_and_prices() {
        let basket = Basket {
            id: 1,
            user_id: UserId::new("buyer-1"),
            lines: vec![line(1, "10.00", 3), line(2, "2.50", 2)],
        };

        assert_eq!(basket.total_quantity(), 5);
        assert_eq!(basket.total_price(), BigDecimal::from_str("35.00").unwrap());
    }

    #[test]
    fn should_saturate_total_quantity_instead_of_overflowing() {
        let basket = Basket {
            id: 1,
            user_id: UserId::new("buyer-1"),
            lines: vec![line(1, "1.00", i64::MAX), line(2, "1.00", 1)],
        };

        assert_eq!(basket.total_quantity(), i64::MAX);
    }

    #[test]
    fn should_report_zero_totals_for_empty_basket() {
        let basket = Basket {
            id: 1,
            user_id: UserId::new("buyer-1"),
            lines: vec![],
        };

        assert!(basket.is_empty());
        assert_eq!(basket.total_quantity(), 0);
        assert_eq!(basket.total_price(), BigDecimal::from(0));
    }
}
