use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    Confirmed,
    Assembled,
    Sent,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// `new` and `confirmed` are reached only through checkout and code confirmation.
    pub fn is_manually_settable(&self) -> bool {
        !matches!(self, OrderStatus::New | OrderStatus::Confirmed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "new"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Assembled => write!(f, "assembled"),
            OrderStatus::Sent => write!(f, "sent"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderStatus::New),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "assembled" => Ok(OrderStatus::Assembled),
            "sent" => Ok(OrderStatus::Sent),
            "delivered" => Ok(OrderStatus::Delivered),
            "canceled" => Ok(OrderStatus::Canceled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// Quantity snapshotted from the basket when the order was created.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: UserId,
    pub address_id: Option<i64>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Everything written by checkout in one transaction: the order, its items and its code.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    pub user_id: UserId,
    pub address_id: i64,
    pub items: Vec<NewOrderItem>,
    pub code: String,
    pub code_expires_at: DateTime<Utc>,
}
