use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        }
    }

    pub fn parse(raw: &str) -> OrderStatus {
        match raw {
            "completed" => OrderStatus::Completed,
            "canceled" => OrderStatus::Canceled,
            _ => OrderStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: String,
    pub quantity: i64,
    pub total_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub currency_code: String,
    pub total_minor: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLineItem>,
}

/// Query filter for the order store. `start` is inclusive, `end` exclusive.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub currency: Option<String>,
    pub status: Option<OrderStatus>,
}
