#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address.city_empty")]
    CityEmpty,
    #[error("address.street_empty")]
    StreetEmpty,
    #[error("address.house_empty")]
    HouseEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
