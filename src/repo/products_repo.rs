use crate::repo::ProductStore;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct ProductsRepo {
    pub pool: PgPool,
}

#[async_trait]
impl ProductStore for ProductsRepo {
    async fn find_title(&self, product_id: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT title FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("title")))
    }
}
