use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::supplier::model::Supplier;
use business::domain::supplier::repository::SupplierRepository;

use super::entity::SupplierEntity;
use crate::errors::map_sqlx_error;

pub struct SupplierRepositoryPostgres {
    pool: PgPool,
}

impl SupplierRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for SupplierRepositoryPostgres {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Supplier>, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            "SELECT id, user_id, name, accepts_orders FROM suppliers WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn set_accepts_orders(
        &self,
        supplier_id: i64,
        accepts_orders: bool,
    ) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            "UPDATE suppliers SET accepts_orders = $2 WHERE id = $1 RETURNING id, user_id, name, accepts_orders",
        )
        .bind(supplier_id)
        .bind(accepts_orders)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
