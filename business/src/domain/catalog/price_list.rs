use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde_json::Value;

use super::errors::PriceListError;
use super::model::Category;

/// Largest price a `NUMERIC(10, 2)` column holds, exclusive.
const PRICE_CEILING: i64 = 100_000_000;
const PRICE_SCALE: i64 = 2;

/// Price-list document as submitted by a supplier, before any coercion.
/// Scalar fields stay untyped because suppliers send numbers and numeric strings interchangeably.
#[derive(Debug, Clone, Default)]
pub struct RawPriceList {
    pub categories: Vec<RawCategory>,
    pub goods: Option<Vec<RawGood>>,
}

#[derive(Debug, Clone)]
pub struct RawCategory {
    pub id: Value,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RawGood {
    pub id: Value,
    pub name: String,
    pub category: Value,
    pub price: Value,
    pub quantity: Value,
    pub parameters: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoodParameter {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceListGood {
    pub external_id: String,
    pub name: String,
    pub category_id: i64,
    pub price: BigDecimal,
    pub quantity: i64,
    pub parameters: Vec<GoodParameter>,
}

/// A fully validated price list, safe to apply in one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceList {
    pub categories: Vec<Category>,
    pub parameter_names: Vec<String>,
    pub goods: Vec<PriceListGood>,
}

/// Counts reported back to the supplier after an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceListImport {
    pub created: u64,
    pub updated: u64,
}

impl RawPriceList {
    /// Coerces and checks every entry. The first problem aborts the whole document.
    pub fn validate(self) -> Result<PriceList, PriceListError> {
        let raw_goods = self.goods.ok_or(PriceListError::GoodsMissing)?;

        let mut categories: BTreeMap<i64, Category> = BTreeMap::new();
        for raw in self.categories {
            let id = coerce_integer(&raw.id).ok_or_else(|| PriceListError::InvalidCategoryId {
                category: raw.name.clone(),
            })?;
            categories.entry(id).or_insert(Category { id, name: raw.name });
        }

        let parameter_names: BTreeSet<String> = raw_goods
            .iter()
            .flat_map(|good| good.parameters.keys().cloned())
            .collect();

        let goods = raw_goods
            .into_iter()
            .map(|raw| validate_good(raw, &categories))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PriceList {
            categories: categories.into_values().collect(),
            parameter_names: parameter_names.into_iter().collect(),
            goods,
        })
    }
}

fn validate_good(
    raw: RawGood,
    categories: &BTreeMap<i64, Category>,
) -> Result<PriceListGood, PriceListError> {
    let external_id = match &raw.id {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => {
            return Err(PriceListError::InvalidExternalId {
                name: raw.name.clone(),
            });
        }
    };

    if raw.name.trim().is_empty() {
        return Err(PriceListError::NameEmpty { external_id });
    }

    let category_id = coerce_integer(&raw.category)
        .filter(|id| categories.contains_key(id))
        .ok_or_else(|| PriceListError::CategoryNotFound {
            category: stringify(&raw.category),
        })?;

    let quantity = coerce_integer(&raw.quantity).ok_or_else(|| PriceListError::InvalidQuantity {
        name: raw.name.clone(),
        external_id: external_id.clone(),
    })?;
    if quantity < 0 {
        return Err(PriceListError::NegativeQuantity {
            name: raw.name,
            external_id,
        });
    }

    let price = coerce_decimal(&raw.price)
        .filter(|price| *price < BigDecimal::from(PRICE_CEILING) && fits_cents(price))
        .ok_or_else(|| PriceListError::InvalidPrice {
            name: raw.name.clone(),
            external_id: external_id.clone(),
        })?;
    if price < BigDecimal::zero() {
        return Err(PriceListError::NegativePrice {
            name: raw.name,
            external_id,
        });
    }

    let parameters = raw
        .parameters
        .into_iter()
        .map(|(name, value)| GoodParameter {
            name,
            value: stringify(&value),
        })
        .collect();

    Ok(PriceListGood {
        external_id,
        name: raw.name,
        category_id,
        price,
        quantity,
        parameters,
    })
}

/// True when the value has no digits past the cent, so the column stores it unrounded.
fn fits_cents(price: &BigDecimal) -> bool {
    price.with_scale(PRICE_SCALE) == *price
}

/// Accepts JSON integers and strings holding an integer.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Accepts JSON numbers and strings holding a decimal literal.
pub fn coerce_decimal(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Text form stored for parameter values: strings verbatim, everything else as JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn good(id: Value, category: Value, price: Value, quantity: Value) -> RawGood {
        RawGood {
            id,
            name: "Smartphone Apple iPhone XS Max 512GB (gold)".to_string(),
            category,
            price,
            quantity,
            parameters: BTreeMap::from([
                ("Diagonal (inches)".to_string(), json!(6.5)),
                ("Color".to_string(), json!("gold")),
            ]),
        }
    }

    fn document(goods: Vec<RawGood>) -> RawPriceList {
        RawPriceList {
            categories: vec![RawCategory {
                id: json!(224),
                name: "Smartphones".to_string(),
            }],
            goods: Some(goods),
        }
    }

    #[test]
    fn should_validate_well_formed_document() {
        let raw = document(vec![good(json!(4216292), json!(224), json!("110000.50"), json!(14))]);

        let price_list = raw.validate().unwrap();

        assert_eq!(price_list.categories.len(), 1);
        assert_eq!(price_list.categories[0].id, 224);
        assert_eq!(
            price_list.parameter_names,
            vec!["Color".to_string(), "Diagonal (inches)".to_string()]
        );
        let good = &price_list.goods[0];
        assert_eq!(good.external_id, "4216292");
        assert_eq!(good.category_id, 224);
        assert_eq!(good.quantity, 14);
        assert_eq!(good.price, BigDecimal::from_str("110000.50").unwrap());
        assert!(good.parameters.contains(&GoodParameter {
            name: "Diagonal (inches)".to_string(),
            value: "6.5".to_string(),
        }));
    }

    #[test]
    fn should_reject_document_without_goods() {
        let raw = RawPriceList {
            categories: vec![],
            goods: None,
        };

        assert!(matches!(raw.validate(), Err(PriceListError::GoodsMissing)));
    }

    #[test]
    fn should_reject_good_with_unknown_category() {
        let raw = document(vec![good(json!("A-1"), json!(7), json!(10), json!(1))]);

        match raw.validate() {
            Err(PriceListError::CategoryNotFound { category }) => assert_eq!(category, "7"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn should_reject_negative_quantity_anywhere_in_batch() {
        let raw = document(vec![
            good(json!("A-1"), json!(224), json!(10), json!(3)),
            good(json!("A-2"), json!(224), json!(10), json!(-1)),
        ]);

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let raw = document(vec![good(json!("A-1"), json!(224), json!("cheap"), json!(3))]);

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn should_reject_price_finer_than_cents() {
        let raw = document(vec![good(json!("A-1"), json!(224), json!("9.999"), json!(3))]);

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn should_accept_trailing_zeros_past_cents() {
        let raw = document(vec![good(json!("A-1"), json!(224), json!("9.9900"), json!(3))]);

        let price_list = raw.validate().unwrap();

        assert_eq!(price_list.goods[0].price, BigDecimal::from_str("9.99").unwrap());
    }

    #[test]
    fn should_reject_negative_price() {
        let raw = document(vec![good(json!("A-1"), json!(224), json!(-0.5), json!(3))]);

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::NegativePrice { .. })
        ));
    }

    #[test]
    fn should_reject_fractional_quantity() {
        let raw = document(vec![good(json!("A-1"), json!(224), json!(1), json!(2.5))]);

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn should_accept_string_category_ids() {
        let mut raw = document(vec![good(json!("A-1"), json!("224"), json!(1), json!("2"))]);
        raw.categories[0].id = json!("224");

        let price_list = raw.validate().unwrap();

        assert_eq!(price_list.goods[0].category_id, 224);
        assert_eq!(price_list.goods[0].quantity, 2);
    }

    #[test]
    fn should_reject_category_with_non_integer_id() {
        let mut raw = document(vec![]);
        raw.categories[0].id = json!("phones");

        assert!(matches!(
            raw.validate(),
            Err(PriceListError::InvalidCategoryId { .. })
        ));
    }

    #[test]
    fn should_stringify_parameter_values() {
        assert_eq!(stringify(&json!("black")), "black");
        assert_eq!(stringify(&json!(512)), "512");
        assert_eq!(stringify(&json!(true)), "true");
    }

    proptest! {
        #[test]
        fn should_coerce_any_integer_from_number_or_string(n in any::<i64>()) {
            prop_assert_eq!(coerce_integer(&json!(n)), Some(n));
            prop_assert_eq!(coerce_integer(&json!(n.to_string())), Some(n));
        }

        #[test]
        fn should_never_accept_negative_quantities(n in i64::MIN..0) {
            let raw = document(vec![good(json!("A-1"), json!(224), json!(1), json!(n))]);
            let rejected = matches!(raw.validate(), Err(PriceListError::NegativeQuantity { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn should_coerce_cent_prices_exactly(cents in 0i64..10_000_000_000) {
            let literal = format!("{}.{:02}", cents / 100, cents % 100);
            let price = coerce_decimal(&json!(literal)).unwrap();
            prop_assert_eq!(price, BigDecimal::new(cents.into(), 2));
        }
    }
}
