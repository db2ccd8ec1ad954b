use crate::domain::shared::value_objects::UserId;

use super::errors::AddressError;

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryAddress {
    pub id: i64,
    pub user_id: UserId,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
}

/// An address not yet persisted; the repository assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeliveryAddress {
    pub user_id: UserId,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
}

impl NewDeliveryAddress {
    pub fn new(
        user_id: UserId,
        city: String,
        street: String,
        house: String,
        apartment: Option<String>,
    ) -> Result<Self, AddressError> {
        if city.trim().is_empty() {
            return Err(AddressError::CityEmpty);
        }
        if street.trim().is_empty() {
            return Err(AddressError::StreetEmpty);
        }
        if house.trim().is_empty() {
            return Err(AddressError::HouseEmpty);
        }

        Ok(Self {
            user_id,
            city: city.trim().to_string(),
            street: street.trim().to_string(),
            house: house.trim().to_string(),
            apartment: apartment
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        })
    }
}
