use crate::analytics::types::{
    ChartData, ChartDataset, CurrencyMap, CustomersAnalytics, DashboardCharts, DashboardMetrics,
    DashboardResponse, DataSource, DateRangeOut, GrowthMap, OrdersAnalytics, RevenueAnalytics,
    TopProduct,
};
use crate::analytics::window::DateWindow;
use std::collections::BTreeMap;

const FALLBACK_CURRENCY: &str = "usd";
const DAILY_REVENUE_MINOR: i64 = 250_000;
const DAILY_ORDERS: i64 = 18;

/// Static stand-in payload served when live aggregation fails, so the
/// dashboard never renders an error state. Tagged `fallback` so the operator
/// can tell it apart from real numbers.
pub fn fallback_dashboard(window: &DateWindow) -> DashboardResponse {
    let labels = window.labels();
    let days = labels.len() as i64;

    let total_revenue = DAILY_REVENUE_MINOR * days;
    let total_orders = DAILY_ORDERS * days;

    DashboardResponse {
        metrics: DashboardMetrics {
            revenue: RevenueAnalytics {
                total: usd(total_revenue),
                growth: usd_growth(0.0),
            },
            orders: OrdersAnalytics {
                total: usd(total_revenue),
                completed: usd(total_revenue * 8 / 10),
                pending: usd(total_revenue * 15 / 100),
                canceled: usd(total_revenue / 20),
                growth: usd_growth(0.0),
                average_order_value: usd_growth(total_revenue as f64 / total_orders as f64),
            },
            customers: CustomersAnalytics {
                total: (days * 4) as u64,
                new_customers: (days * 4) as u64,
                growth: 0.0,
            },
        },
        charts: DashboardCharts {
            revenue: chart(labels.clone(), "Revenue", DAILY_REVENUE_MINOR),
            orders: chart(labels, "Orders", DAILY_ORDERS),
        },
        top_products: vec![
            placeholder_product("prod_fallback_01", "Sample Product A", 24, 96_000),
            placeholder_product("prod_fallback_02", "Sample Product B", 15, 52_500),
            placeholder_product("prod_fallback_03", "Sample Product C", 9, 31_500),
        ],
        available_currencies: vec![FALLBACK_CURRENCY.to_string()],
        date_range: DateRangeOut {
            start: window.start,
            end: window.end,
        },
        source: DataSource::Fallback,
    }
}

fn usd(amount: i64) -> CurrencyMap {
    BTreeMap::from([(FALLBACK_CURRENCY.to_string(), amount)])
}

fn usd_growth(value: f64) -> GrowthMap {
    BTreeMap::from([(FALLBACK_CURRENCY.to_string(), value)])
}

fn chart(labels: Vec<String>, label: &str, per_day: i64) -> ChartData {
    let data = vec![per_day; labels.len()];
    ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: label.to_string(),
            currency: FALLBACK_CURRENCY.to_string(),
            data,
            border_color: "#3B82F6".to_string(),
            background_color: "#3B82F620".to_string(),
        }],
    }
}

fn placeholder_product(id: &str, name: &str, sales: i64, revenue_minor: i64) -> TopProduct {
    TopProduct {
        id: id.to_string(),
        name: name.to_string(),
        sales: usd(sales),
        revenue: usd(revenue_minor),
    }
}
