use crate::domain::order::{OrderFilter, OrderRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod customers_repo;
pub mod memory;
pub mod orders_repo;
pub mod products_repo;

/// Read-side seams over the commerce data. Analytics never writes.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRecord>>;

    async fn list_currencies(&self) -> Result<Vec<String>>;
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn count_customers(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<u64>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_title(&self, product_id: &str) -> Result<Option<String>>;
}
