use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::supplier::model::Supplier;

#[derive(Debug, FromRow)]
pub struct SupplierEntity {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub accepts_orders: bool,
}

impl SupplierEntity {
    pub fn into_domain(self) -> Supplier {
        Supplier {
            id: self.id,
            user_id: UserId::new(self.user_id),
            name: self.name,
            accepts_orders: self.accepts_orders,
        }
    }
}
