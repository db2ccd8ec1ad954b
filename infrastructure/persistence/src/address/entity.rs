use sqlx::FromRow;

use business::domain::address::model::DeliveryAddress;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct DeliveryAddressEntity {
    pub id: i64,
    pub user_id: String,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
}

impl DeliveryAddressEntity {
    pub fn into_domain(self) -> DeliveryAddress {
        DeliveryAddress {
            id: self.id,
            user_id: UserId::new(self.user_id),
            city: self.city,
            street: self.street,
            house: self.house,
            apartment: self.apartment,
        }
    }
}
