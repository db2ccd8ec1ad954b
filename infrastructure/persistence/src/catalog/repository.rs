use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::catalog::model::Product;
use business::domain::catalog::price_list::{PriceList, PriceListGood, PriceListImport};
use business::domain::catalog::repository::{PriceListRepository, ProductRepository};
use business::domain::errors::RepositoryError;

use super::entity::{ProductEntity, UpsertedProductEntity};
use crate::errors::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, category_id, supplier_id, price, quantity, external_id FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

pub struct PriceListRepositoryPostgres {
    pool: PgPool,
}

impl PriceListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn upsert_product(
        tx: &mut Transaction<'_, Postgres>,
        supplier_id: i64,
        good: &PriceListGood,
    ) -> Result<UpsertedProductEntity, RepositoryError> {
        // xmax is zero only for rows inserted by this statement
        sqlx::query_as::<_, UpsertedProductEntity>(
            r#"INSERT INTO products (name, category_id, supplier_id, price, quantity, external_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (supplier_id, external_id) DO UPDATE SET
                name = EXCLUDED.name,
                category_id = EXCLUDED.category_id,
                price = EXCLUDED.price,
                quantity = EXCLUDED.quantity,
                updated_at = NOW()
            RETURNING id, (xmax = 0) AS inserted"#,
        )
        .bind(&good.name)
        .bind(good.category_id)
        .bind(supplier_id)
        .bind(&good.price)
        .bind(good.quantity)
        .bind(&good.external_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl PriceListRepository for PriceListRepositoryPostgres {
    async fn apply(
        &self,
        supplier_id: i64,
        price_list: &PriceList,
    ) -> Result<PriceListImport, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Existing categories keep their name
        for category in &price_list.categories {
            sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
                .bind(category.id)
                .bind(&category.name)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        let mut parameter_ids: HashMap<&str, i64> = HashMap::new();
        for name in &price_list.parameter_names {
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO parameters (name) VALUES ($1) ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name RETURNING id",
            )
            .bind(name)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
            parameter_ids.insert(name.as_str(), id);
        }

        let mut import = PriceListImport::default();
        for good in &price_list.goods {
            let product = Self::upsert_product(&mut tx, supplier_id, good).await?;
            if product.inserted {
                import.created += 1;
            } else {
                import.updated += 1;
            }

            for parameter in &good.parameters {
                let parameter_id = parameter_ids
                    .get(parameter.name.as_str())
                    .copied()
                    .ok_or(RepositoryError::NotFound)?;
                sqlx::query(
                    r#"INSERT INTO product_parameters (product_id, parameter_id, value)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (product_id, parameter_id) DO UPDATE SET value = EXCLUDED.value"#,
                )
                .bind(product.id)
                .bind(parameter_id)
                .bind(&parameter.value)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
            }
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(import)
    }
}
