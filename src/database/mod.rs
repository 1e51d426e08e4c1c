pub mod manager;
pub mod models;
pub mod subscription_repository;
pub mod user_repository;

pub use manager::{DatabaseError, DatabaseManager};
