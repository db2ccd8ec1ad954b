use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::order::confirmation::ConfirmationCode;
use business::domain::order::model::{Order, OrderItem, OrderStatus, PendingOrder};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{ConfirmationCodeEntity, OrderEntity, OrderItemEntity};
use crate::errors::map_sqlx_error;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn items_by_order(
        &self,
        order_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<OrderItem>>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderItemEntity>(
            "SELECT id, order_id, product_id, quantity FROM order_items WHERE order_id = ANY($1) ORDER BY id",
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for entity in entities {
            grouped
                .entry(entity.order_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(grouped)
    }

    async fn with_items(&self, entities: Vec<OrderEntity>) -> Result<Vec<Order>, RepositoryError> {
        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut items = self.items_by_order(&ids).await?;

        entities
            .into_iter()
            .map(|e| {
                let order_items = items.remove(&e.id).unwrap_or_default();
                e.into_domain(order_items)
            })
            .collect()
    }

    async fn single_with_items(&self, entity: OrderEntity) -> Result<Order, RepositoryError> {
        self.with_items(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_pending(&self, pending: &PendingOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let order = sqlx::query_as::<_, OrderEntity>(
            r#"INSERT INTO orders (user_id, address_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, address_id, status, created_at, updated_at"#,
        )
        .bind(pending.user_id.as_str())
        .bind(pending.address_id)
        .bind(OrderStatus::New.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let mut items = Vec::with_capacity(pending.items.len());
        for item in &pending.items {
            let entity = sqlx::query_as::<_, OrderItemEntity>(
                r#"INSERT INTO order_items (order_id, product_id, quantity)
                VALUES ($1, $2, $3)
                RETURNING id, order_id, product_id, quantity"#,
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
            items.push(entity.into_domain());
        }

        sqlx::query(
            "INSERT INTO confirmation_codes (order_id, code, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(order.id)
        .bind(&pending.code)
        .bind(pending.code_expires_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        order.into_domain(items)
    }

    async fn get_for_user(&self, id: i64, user_id: &UserId) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, address_id, status, created_at, updated_at FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.single_with_items(entity).await
    }

    async fn find_confirmation_code(
        &self,
        order_id: i64,
    ) -> Result<Option<ConfirmationCode>, RepositoryError> {
        let entity = sqlx::query_as::<_, ConfirmationCodeEntity>(
            "SELECT order_id, code, expires_at FROM confirmation_codes WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete_confirmation_code(&self, order_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM confirmation_codes WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn confirm(
        &self,
        order_id: i64,
        user_id: &UserId,
        code: &str,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Only one transaction can consume the code; the loser sees zero rows.
        // Orders moved out of `new` by staff can no longer be confirmed.
        let consumed = sqlx::query(
            r#"DELETE FROM confirmation_codes c USING orders o
            WHERE c.order_id = $1 AND c.code = $2 AND o.id = c.order_id
                AND o.user_id = $3 AND o.status = $4"#,
        )
        .bind(order_id)
        .bind(code)
        .bind(user_id.as_str())
        .bind(OrderStatus::New.to_string())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if consumed.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query(
            r#"UPDATE products p
            SET quantity = p.quantity - oi.quantity, updated_at = NOW()
            FROM order_items oi
            WHERE oi.order_id = $1 AND p.id = oi.product_id"#,
        )
        .bind(order_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let order = sqlx::query_as::<_, OrderEntity>(
            r#"UPDATE orders SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, address_id, status, created_at, updated_at"#,
        )
        .bind(order_id)
        .bind(OrderStatus::Confirmed.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query(
            "DELETE FROM basket_items bi USING baskets b WHERE b.id = bi.basket_id AND b.user_id = $1",
        )
        .bind(user_id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        self.single_with_items(order).await.map(Some)
    }

    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            r#"UPDATE orders SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, address_id, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.single_with_items(entity).await
    }

    async fn get_by_supplier(&self, supplier_id: i64) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            r#"SELECT DISTINCT o.id, o.user_id, o.address_id, o.status, o.created_at, o.updated_at
            FROM orders o
            JOIN order_items oi ON oi.order_id = o.id
            JOIN products p ON p.id = oi.product_id
            WHERE p.supplier_id = $1
            ORDER BY o.created_at DESC, o.id DESC"#,
        )
        .bind(supplier_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.with_items(entities).await
    }
}
