use crate::repo::CustomerStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct CustomersRepo {
    pub pool: PgPool,
}

#[async_trait]
impl CustomerStore for CustomersRepo {
    async fn count_customers(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<u64> {
        let row =
            sqlx::query("SELECT COUNT(*) AS n FROM customers WHERE created_at >= $1 AND created_at < $2")
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?;
        let count: i64 = row.get("n");
        Ok(count as u64)
    }
}
