use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Basket, BasketItem, BasketLine};

#[async_trait]
pub trait BasketRepository: Send + Sync {
    /// Loads the user's basket, creating an empty one on first access.
    async fn get_or_create(&self, user_id: &UserId) -> Result<Basket, RepositoryError>;
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Basket>, RepositoryError>;
    /// Inserts the (basket, product) pair or adds `quantity` to the existing row, atomically.
    async fn add_item(
        &self,
        basket_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<BasketItem, RepositoryError>;
    /// `NotFound` unless the item sits in `user_id`'s basket.
    async fn get_line(&self, item_id: i64, user_id: &UserId)
    -> Result<BasketLine, RepositoryError>;
    async fn set_item_quantity(
        &self,
        item_id: i64,
        quantity: i64,
    ) -> Result<BasketItem, RepositoryError>;
    async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<(), RepositoryError>;
}
