use crate::analytics::window::DateWindow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub type CurrencyMap = BTreeMap<String, i64>;
pub type GrowthMap = BTreeMap<String, f64>;

#[derive(Debug, Clone)]
pub struct AnalyticsFilters {
    pub window: DateWindow,
    /// Lowercased ISO code; `None` means all currencies.
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalytics {
    pub total: CurrencyMap,
    pub growth: GrowthMap,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersAnalytics {
    pub total: CurrencyMap,
    pub completed: CurrencyMap,
    pub pending: CurrencyMap,
    pub canceled: CurrencyMap,
    pub growth: GrowthMap,
    pub average_order_value: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersAnalytics {
    pub total: u64,
    pub new_customers: u64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub revenue: RevenueAnalytics,
    pub orders: OrdersAnalytics,
    pub customers: CustomersAnalytics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub sales: CurrencyMap,
    pub revenue: CurrencyMap,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub currency: String,
    pub data: Vec<i64>,
    pub border_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub revenue: ChartData,
    pub orders: ChartData,
}

/// Whether the payload came from live aggregation or the static fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeOut {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub charts: DashboardCharts,
    pub top_products: Vec<TopProduct>,
    pub available_currencies: Vec<String>,
    pub date_range: DateRangeOut,
    pub source: DataSource,
}
