use crate::domain::order::{OrderFilter, OrderLineItem, OrderRecord, OrderStatus};
use crate::repo::OrderStore;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;

#[derive(Clone)]
pub struct OrdersRepo {
    pub pool: PgPool,
}

#[async_trait]
impl OrderStore for OrdersRepo {
    async fn list_orders(&self, filter: &OrderFilter) -> anyhow::Result<Vec<OrderRecord>> {
        let mut sql = String::from(
            "SELECT id, currency_code, total_minor, status, created_at \
             FROM orders WHERE created_at >= $1 AND created_at < $2",
        );
        let mut next_bind = 2;
        if filter.currency.is_some() {
            next_bind += 1;
            sql.push_str(&format!(" AND currency_code = ${next_bind}"));
        }
        if filter.status.is_some() {
            next_bind += 1;
            sql.push_str(&format!(" AND status = ${next_bind}"));
        }
        sql.push_str(" ORDER BY created_at");

        let mut query = sqlx::query(&sql).bind(filter.start).bind(filter.end);
        if let Some(currency) = &filter.currency {
            query = query.bind(currency);
        }
        if let Some(status) = &filter.status {
            query = query.bind(status.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        let mut orders: Vec<OrderRecord> = rows
            .into_iter()
            .map(|r| OrderRecord {
                id: r.get("id"),
                currency_code: r.get("currency_code"),
                total_minor: r.get("total_minor"),
                status: OrderStatus::parse(r.get::<&str, _>("status")),
                created_at: r.get("created_at"),
                items: Vec::new(),
            })
            .collect();

        if orders.is_empty() {
            return Ok(orders);
        }

        let ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let item_rows = sqlx::query(
            "SELECT order_id, product_id, quantity, total_minor \
             FROM order_items WHERE order_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderLineItem>> = HashMap::new();
        for row in item_rows {
            let order_id: String = row.get("order_id");
            items_by_order.entry(order_id).or_default().push(OrderLineItem {
                product_id: row.get("product_id"),
                quantity: row.get("quantity"),
                total_minor: row.get("total_minor"),
            });
        }
        for order in &mut orders {
            if let Some(items) = items_by_order.remove(&order.id) {
                order.items = items;
            }
        }

        Ok(orders)
    }

    async fn list_currencies(&self) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query("SELECT DISTINCT currency_code FROM orders ORDER BY currency_code")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.get("currency_code")).collect())
    }
}
