use crate::analytics::currency::{
    aggregate_by_currency, count_by_currency, growth_rate, scalar_growth,
};
use crate::analytics::types::{
    AnalyticsFilters, ChartData, ChartDataset, CurrencyMap, CustomersAnalytics, DashboardCharts,
    DashboardMetrics, DashboardResponse, DataSource, DateRangeOut, OrdersAnalytics,
    RevenueAnalytics, TopProduct,
};
use crate::analytics::window::DateWindow;
use crate::domain::order::{OrderFilter, OrderStatus};
use crate::repo::{CustomerStore, OrderStore, ProductStore};
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

const CHART_COLORS: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4",
];
const TOP_PRODUCT_LIMIT: usize = 10;

/// Stateless dashboard aggregation over the commerce read stores. Every
/// request recomputes from scratch; nothing is cached or persisted here.
#[derive(Clone)]
pub struct AnalyticsService {
    orders: Arc<dyn OrderStore>,
    customers: Arc<dyn CustomerStore>,
    products: Arc<dyn ProductStore>,
}

impl AnalyticsService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        customers: Arc<dyn CustomerStore>,
        products: Arc<dyn ProductStore>,
    ) -> Self {
        Self {
            orders,
            customers,
            products,
        }
    }

    pub async fn dashboard(&self, filters: &AnalyticsFilters) -> Result<DashboardResponse> {
        // Independent reads, all-or-nothing: a single failed query fails the
        // whole report.
        let (revenue, orders, customers, available_currencies) = tokio::try_join!(
            self.revenue_analytics(filters),
            self.orders_analytics(filters),
            self.customers_analytics(filters),
            self.available_currencies(),
        )?;
        let top_products = self.top_products(filters).await?;
        let charts = self.sales_trend(filters).await?;

        Ok(DashboardResponse {
            metrics: DashboardMetrics {
                revenue,
                orders,
                customers,
            },
            charts,
            top_products,
            available_currencies,
            date_range: DateRangeOut {
                start: filters.window.start,
                end: filters.window.end,
            },
            source: DataSource::Live,
        })
    }

    pub async fn revenue_analytics(&self, filters: &AnalyticsFilters) -> Result<RevenueAnalytics> {
        let current = self
            .orders
            .list_orders(&order_filter(filters.window, filters, None))
            .await?;
        let previous = self
            .orders
            .list_orders(&order_filter(filters.window.previous(), filters, None))
            .await?;

        let total = aggregate_by_currency(&current);
        let growth = growth_rate(&total, &aggregate_by_currency(&previous));
        Ok(RevenueAnalytics { total, growth })
    }

    pub async fn orders_analytics(&self, filters: &AnalyticsFilters) -> Result<OrdersAnalytics> {
        let window = filters.window;
        let all = self
            .orders
            .list_orders(&order_filter(window, filters, None))
            .await?;
        let completed = self
            .orders
            .list_orders(&order_filter(window, filters, Some(OrderStatus::Completed)))
            .await?;
        let pending = self
            .orders
            .list_orders(&order_filter(window, filters, Some(OrderStatus::Pending)))
            .await?;
        let canceled = self
            .orders
            .list_orders(&order_filter(window, filters, Some(OrderStatus::Canceled)))
            .await?;
        let previous = self
            .orders
            .list_orders(&order_filter(window.previous(), filters, None))
            .await?;

        let total = aggregate_by_currency(&all);
        let growth = growth_rate(&total, &aggregate_by_currency(&previous));

        let counts = count_by_currency(&all);
        let average_order_value: BTreeMap<String, f64> = total
            .iter()
            .map(|(currency, &revenue)| {
                let count = counts.get(currency).copied().unwrap_or(0);
                let aov = if count > 0 {
                    revenue as f64 / count as f64
                } else {
                    0.0
                };
                (currency.clone(), aov)
            })
            .collect();

        Ok(OrdersAnalytics {
            total,
            completed: aggregate_by_currency(&completed),
            pending: aggregate_by_currency(&pending),
            canceled: aggregate_by_currency(&canceled),
            growth,
            average_order_value,
        })
    }

    pub async fn customers_analytics(
        &self,
        filters: &AnalyticsFilters,
    ) -> Result<CustomersAnalytics> {
        let window = filters.window;
        let current = self
            .customers
            .count_customers(window.start, window.end)
            .await?;
        let prev = window.previous();
        let previous = self.customers.count_customers(prev.start, prev.end).await?;

        Ok(CustomersAnalytics {
            total: current,
            new_customers: current,
            growth: scalar_growth(current, previous),
        })
    }

    /// Top 10 products by revenue summed across currencies, from completed
    /// orders only. A failed name lookup degrades to a placeholder instead
    /// of failing the report.
    pub async fn top_products(&self, filters: &AnalyticsFilters) -> Result<Vec<TopProduct>> {
        let orders = self
            .orders
            .list_orders(&order_filter(
                filters.window,
                filters,
                Some(OrderStatus::Completed),
            ))
            .await?;

        let mut per_product: BTreeMap<String, (CurrencyMap, CurrencyMap)> = BTreeMap::new();
        for order in &orders {
            for item in &order.items {
                let (sales, revenue) = per_product.entry(item.product_id.clone()).or_default();
                *sales.entry(order.currency_code.clone()).or_insert(0) += item.quantity;
                *revenue.entry(order.currency_code.clone()).or_insert(0) += item.total_minor;
            }
        }

        let mut ranked: Vec<(String, CurrencyMap, CurrencyMap, i64)> = per_product
            .into_iter()
            .map(|(id, (sales, revenue))| {
                let total: i64 = revenue.values().sum();
                (id, sales, revenue, total)
            })
            .collect();
        ranked.sort_by(|a, b| b.3.cmp(&a.3));
        ranked.truncate(TOP_PRODUCT_LIMIT);

        let mut top = Vec::with_capacity(ranked.len());
        for (id, sales, revenue, _) in ranked {
            let name = match self.products.find_title(&id).await {
                Ok(Some(title)) => title,
                Ok(None) => format!("Product {id}"),
                Err(err) => {
                    tracing::warn!("product lookup failed for {id}: {err:#}");
                    format!("Product {id}")
                }
            };
            top.push(TopProduct {
                id,
                name,
                sales,
                revenue,
            });
        }
        Ok(top)
    }

    /// One data point per calendar day in the window, per currency. Issues
    /// one completed-orders query per day.
    pub async fn sales_trend(&self, filters: &AnalyticsFilters) -> Result<DashboardCharts> {
        let days = filters.window.days();
        let labels = filters.window.labels();

        let mut revenue: BTreeMap<String, Vec<i64>> = BTreeMap::new();
        let mut counts: BTreeMap<String, Vec<i64>> = BTreeMap::new();

        for (idx, day) in days.iter().enumerate() {
            let day_orders = self
                .orders
                .list_orders(&order_filter(*day, filters, Some(OrderStatus::Completed)))
                .await?;
            for (currency, total) in aggregate_by_currency(&day_orders) {
                revenue.entry(currency).or_insert_with(|| vec![0; days.len()])[idx] = total;
            }
            for (currency, n) in count_by_currency(&day_orders) {
                counts.entry(currency).or_insert_with(|| vec![0; days.len()])[idx] = n;
            }
        }

        Ok(DashboardCharts {
            revenue: chart(labels.clone(), &revenue),
            orders: chart(labels, &counts),
        })
    }

    pub async fn available_currencies(&self) -> Result<Vec<String>> {
        let currencies = self.orders.list_currencies().await?;
        if currencies.is_empty() {
            return Ok(vec!["usd".to_string()]);
        }
        Ok(currencies)
    }
}

fn order_filter(
    window: DateWindow,
    filters: &AnalyticsFilters,
    status: Option<OrderStatus>,
) -> OrderFilter {
    OrderFilter {
        start: window.start,
        end: window.end,
        currency: filters.currency.clone(),
        status,
    }
}

fn chart(labels: Vec<String>, series: &BTreeMap<String, Vec<i64>>) -> ChartData {
    let datasets = series
        .iter()
        .enumerate()
        .map(|(i, (currency, data))| {
            let color = CHART_COLORS[i % CHART_COLORS.len()];
            ChartDataset {
                label: currency.to_uppercase(),
                currency: currency.clone(),
                data: data.clone(),
                border_color: color.to_string(),
                background_color: format!("{color}20"),
            }
        })
        .collect();
    ChartData { labels, datasets }
}
