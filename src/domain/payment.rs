use crate::accounts::BankAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// This provider's own notion of payment progress. Distinct from the
/// protocol-level `PaymentSessionStatus` the host reads back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    #[default]
    Pending,
    Authorized,
    Captured,
    Canceled,
}

/// Protocol-level session status, the enum the host framework understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSessionStatus {
    Pending,
    Authorized,
    Captured,
    RequiresMore,
    Error,
    Canceled,
}

/// The session state threaded through every lifecycle call. Typed fields
/// instead of an open-ended map so nothing drifts silently between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[serde(default)]
    pub status: BusinessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_minor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_amount_minor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<BusinessStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PaymentSessionData {
    pub fn session_status(&self) -> PaymentSessionStatus {
        match self.status {
            BusinessStatus::Pending => PaymentSessionStatus::Pending,
            BusinessStatus::Authorized => PaymentSessionStatus::Authorized,
            BusinessStatus::Captured => PaymentSessionStatus::Captured,
            BusinessStatus::Canceled => PaymentSessionStatus::Canceled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_deserializes_as_pending() {
        let data: PaymentSessionData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.status, BusinessStatus::Pending);
        assert_eq!(data.session_status(), PaymentSessionStatus::Pending);
    }
}
