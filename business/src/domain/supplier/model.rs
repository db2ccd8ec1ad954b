use crate::domain::shared::value_objects::UserId;

/// Supplier profile, one per owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    pub accepts_orders: bool,
}
