use crate::domain::order::{OrderFilter, OrderRecord};
use crate::repo::{CustomerStore, OrderStore, ProductStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory stores for tests and local experiments.
#[derive(Default)]
pub struct InMemoryOrderStore {
    pub orders: Vec<OrderRecord>,
    pub query_count: AtomicUsize,
}

impl InMemoryOrderStore {
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders,
            query_count: AtomicUsize::new(0),
        }
    }

    pub fn queries_issued(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_orders(&self, filter: &OrderFilter) -> anyhow::Result<Vec<OrderRecord>> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .orders
            .iter()
            .filter(|o| o.created_at >= filter.start && o.created_at < filter.end)
            .filter(|o| {
                filter
                    .currency
                    .as_deref()
                    .map_or(true, |c| o.currency_code == c)
            })
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn list_currencies(&self) -> anyhow::Result<Vec<String>> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        let mut currencies: Vec<String> =
            self.orders.iter().map(|o| o.currency_code.clone()).collect();
        currencies.sort();
        currencies.dedup();
        Ok(currencies)
    }
}

#[derive(Default)]
pub struct InMemoryCustomerStore {
    pub signups: Vec<DateTime<Utc>>,
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn count_customers(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<u64> {
        Ok(self.signups.iter().filter(|t| **t >= start && **t < end).count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryProductStore {
    pub titles: HashMap<String, String>,
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_title(&self, product_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.titles.get(product_id).cloned())
    }
}
