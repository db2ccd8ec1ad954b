use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::DeliveryAddress;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::get_all::{GetAllAddressesParams, GetAllAddressesUseCase};
use crate::domain::logger::Logger;

pub struct GetAllAddressesUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllAddressesUseCase for GetAllAddressesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllAddressesParams,
    ) -> Result<Vec<DeliveryAddress>, AddressError> {
        self.logger.debug(&format!(
            "Fetching delivery addresses for user: {}",
            params.user_id
        ));
        let addresses = self.repository.get_all(&params.user_id).await?;
        Ok(addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::model::NewDeliveryAddress;
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
    async fn should_return_users_addresses() {
        let mut repo = MockAddressRepo::new();
        repo.expect_get_all()
            .withf(|user_id| user_id.as_str() == "buyer-1")
            .returning(|user_id| {
                Ok(vec![DeliveryAddress {
                    id: 1,
                    user_id: user_id.clone(),
                    city: "Moscow".to_string(),
                    street: "Tverskaya".to_string(),
                    house: "7".to_string(),
                    apartment: Some("12".to_string()),
                }])
            });

        let use_case = GetAllAddressesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllAddressesParams {
                user_id: UserId::new("buyer-1"),
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut repo = MockAddressRepo::new();
        repo.expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllAddressesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllAddressesParams {
                user_id: UserId::new("buyer-1"),
            })
            .await;

        assert!(matches!(result, Err(AddressError::Repository(_))));
    }
}
