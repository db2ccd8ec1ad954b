use poem_openapi::Object;

use business::domain::address::model::DeliveryAddress;

#[derive(Debug, Clone, Object)]
pub struct CreateAddressRequest {
    pub city: String,
    pub street: String,
    pub house: String,
    #[oai(skip_serializing_if_is_none)]
    pub apartment: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AddressResponse {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub house: String,
    #[oai(skip_serializing_if_is_none)]
    pub apartment: Option<String>,
}

impl From<DeliveryAddress> for AddressResponse {
    fn from(address: DeliveryAddress) -> Self {
        Self {
            id: address.id,
            city: address.city,
            street: address.street,
            house: address.house,
            apartment: address.apartment,
        }
    }
}
