use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::{DeliveryAddress, NewDeliveryAddress};
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use crate::domain::logger::Logger;

pub struct CreateAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateAddressUseCase for CreateAddressUseCaseImpl {
    async fn execute(&self, params: CreateAddressParams) -> Result<DeliveryAddress, AddressError> {
        let address = NewDeliveryAddress::new(
            params.user_id,
            params.city,
            params.street,
            params.house,
            params.apartment,
        )?;

        let created = self.repository.create(&address).await?;
        self.logger.info(&format!(
            "Delivery address {} created for user {}",
            created.id, created.user_id
        ));

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub AddressRepo {}

        #[async_trait]
        impl AddressRepository for AddressRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<DeliveryAddress>, RepositoryError>;
            async fn find_for_user(&self, id: i64, user_id: &UserId) -> Result<Option<DeliveryAddress>, RepositoryError>;
            async fn create(&self, address: &NewDeliveryAddress) -> Result<DeliveryAddress, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_trimmed_address() {
        let mut repo = MockAddressRepo::new();
        repo.expect_create()
            .withf(|address| address.city == "Moscow" && address.apartment.is_none())
            .times(1)
            .returning(|address| {
                Ok(DeliveryAddress {
                    id: 1,
                    user_id: address.user_id.clone(),
                    city: address.city.clone(),
                    street: address.street.clone(),
                    house: address.house.clone(),
                    apartment: address.apartment.clone(),
                })
            });

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateAddressParams {
                user_id: UserId::new("buyer-1"),
                city: "  Moscow ".to_string(),
                street: "Tverskaya".to_string(),
                house: "7".to_string(),
                apartment: Some("  ".to_string()),
            })
            .await;

        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn should_not_persist_address_without_house() {
        let mut repo = MockAddressRepo::new();
        repo.expect_create().never();

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateAddressParams {
                user_id: UserId::new("buyer-1"),
                city: "Moscow".to_string(),
                street: "Tverskaya".to_string(),
                house: "".to_string(),
                apartment: None,
            })
            .await;

        assert!(matches!(result, Err(AddressError::HouseEmpty)));
    }
}
