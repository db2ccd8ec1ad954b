pub mod address;
pub mod basket;
pub mod error;
pub mod health;
pub mod order;
pub mod security;
pub mod supplier;
pub mod tags;
