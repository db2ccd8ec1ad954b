use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::address::model::{DeliveryAddress, NewDeliveryAddress};
use business::domain::address::repository::AddressRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::DeliveryAddressEntity;
use crate::errors::map_sqlx_error;

pub struct AddressRepositoryPostgres {
    pool: PgPool,
}

impl AddressRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<DeliveryAddress>, RepositoryError> {
        let entities = sqlx::query_as::<_, DeliveryAddressEntity>(
            "SELECT id, user_id, city, street, house, apartment FROM delivery_addresses WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_for_user(
        &self,
        id: i64,
        user_id: &UserId,
    ) -> Result<Option<DeliveryAddress>, RepositoryError> {
        let entity = sqlx::query_as::<_, DeliveryAddressEntity>(
            "SELECT id, user_id, city, street, house, apartment FROM delivery_addresses WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(
        &self,
        address: &NewDeliveryAddress,
    ) -> Result<DeliveryAddress, RepositoryError> {
        let entity = sqlx::query_as::<_, DeliveryAddressEntity>(
            r#"INSERT INTO delivery_addresses (user_id, city, street, house, apartment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, city, street, house, apartment"#,
        )
        .bind(address.user_id.as_str())
        .bind(&address.city)
        .bind(&address.street)
        .bind(&address.house)
        .bind(&address.apartment)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }
}
