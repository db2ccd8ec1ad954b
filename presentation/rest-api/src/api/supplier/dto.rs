use std::collections::BTreeMap;

use poem_openapi::Object;
use serde_json::Value;

use business::domain::catalog::price_list::{
    PriceListImport, RawCategory, RawGood, RawPriceList,
};
use business::domain::supplier::model::Supplier;

#[derive(Debug, Clone, Object)]
pub struct ToggleAcceptsOrdersRequest {
    #[oai(skip_serializing_if_is_none)]
    pub accepts_orders: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub accepts_orders: bool,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            accepts_orders: supplier.accepts_orders,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceListImportResponse {
    /// Products that did not exist before the upload
    pub created: u64,
    /// Existing products whose data was replaced
    pub updated: u64,
}

impl From<PriceListImport> for PriceListImportResponse {
    fn from(import: PriceListImport) -> Self {
        Self {
            created: import.created,
            updated: import.updated,
        }
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn field(object: &serde_json::Map<String, Value>, key: &str) -> Value {
    object.get(key).cloned().unwrap_or(Value::Null)
}

fn raw_category(value: &Value) -> RawCategory {
    match value.as_object() {
        Some(object) => RawCategory {
            id: field(object, "id"),
            name: text(object.get("name")),
        },
        None => RawCategory {
            id: Value::Null,
            name: String::new(),
        },
    }
}

fn raw_good(value: &Value) -> RawGood {
    let empty = serde_json::Map::new();
    let object = value.as_object().unwrap_or(&empty);

    let parameters: BTreeMap<String, Value> = object
        .get("parameters")
        .and_then(Value::as_object)
        .map(|params| params.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    RawGood {
        id: field(object, "id"),
        name: text(object.get("name")),
        category: field(object, "category"),
        price: field(object, "price"),
        quantity: field(object, "quantity"),
        parameters,
    }
}

/// Lifts an arbitrary JSON upload into the untyped price-list shape.
/// A document that is not an object, or whose `goods` is not an array, carries no goods.
pub fn raw_price_list(document: &Value) -> RawPriceList {
    let Some(object) = document.as_object() else {
        return RawPriceList::default();
    };

    let categories = object
        .get("categories")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(raw_category).collect())
        .unwrap_or_default();

    let goods = object
        .get("goods")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(raw_good).collect());

    RawPriceList { categories, goods }
}
