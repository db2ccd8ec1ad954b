use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::basket::model::{Basket, BasketItem, BasketLine};
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{BasketEntity, BasketItemEntity, BasketLineEntity};
use crate::errors::map_sqlx_error;

const LINE_COLUMNS: &str = r#"
    bi.id AS item_id, bi.basket_id, bi.quantity AS item_quantity,
    p.id AS product_id, p.name AS product_name, p.category_id, p.price,
    p.quantity AS stock, p.external_id,
    s.id AS supplier_id, s.user_id AS supplier_user_id, s.name AS supplier_name, s.accepts_orders
    FROM basket_items bi
    JOIN products p ON p.id = bi.product_id
    JOIN suppliers s ON s.id = p.supplier_id"#;

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, basket: BasketEntity) -> Result<Basket, RepositoryError> {
        let lines = sqlx::query_as::<_, BasketLineEntity>(&format!(
            "SELECT {LINE_COLUMNS} WHERE bi.basket_id = $1 ORDER BY bi.id"
        ))
        .bind(basket.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Basket {
            id: basket.id,
            user_id: UserId::new(basket.user_id),
            lines: lines.into_iter().map(|e| e.into_domain()).collect(),
        })
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Basket, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row as well
        let basket = sqlx::query_as::<_, BasketEntity>(
            r#"INSERT INTO baskets (user_id) VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id"#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.load(basket).await
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError> {
        let basket = sqlx::query_as::<_, BasketEntity>(
            "SELECT id, user_id FROM baskets WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match basket {
            Some(basket) => self.load(basket).await.map(Some),
            None => Ok(None),
        }
    }

    async fn add_item(
        &self,
        basket_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<BasketItem, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            r#"INSERT INTO basket_items (basket_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (basket_id, product_id)
            DO UPDATE SET quantity = basket_items.quantity + EXCLUDED.quantity
            RETURNING id, basket_id, product_id, quantity"#,
        )
        .bind(basket_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn get_line(
        &self,
        item_id: i64,
        user_id: &UserId,
    ) -> Result<BasketLine, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketLineEntity>(&format!(
            "SELECT {LINE_COLUMNS} JOIN baskets b ON b.id = bi.basket_id WHERE bi.id = $1 AND b.user_id = $2"
        ))
        .bind(item_id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn set_item_quantity(
        &self,
        item_id: i64,
        quantity: i64,
    ) -> Result<BasketItem, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            "UPDATE basket_items SET quantity = $2 WHERE id = $1 RETURNING id, basket_id, product_id, quantity",
        )
        .bind(item_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM basket_items bi USING baskets b WHERE bi.id = $1 AND b.id = bi.basket_id AND b.user_id = $2",
        )
        .bind(item_id)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
