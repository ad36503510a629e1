use crate::domain::payment::{PaymentSessionData, PaymentSessionStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod bank_transfer;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid bank account selected: {0}")]
    InvalidSelection(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiatePaymentOutput {
    pub id: String,
    pub data: PaymentSessionData,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorizePaymentOutput {
    pub status: PaymentSessionStatus,
    pub data: PaymentSessionData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookAction {
    Authorized,
    Captured,
    NotSupported,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookActionResult {
    pub action: WebhookAction,
    pub session_id: String,
    pub amount_minor: i64,
}

/// The fixed capability set the host framework demands of a payment
/// provider. One implementation per payment method.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    fn identifier(&self) -> &'static str;

    async fn initiate_payment(
        &self,
        currency_code: &str,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<InitiatePaymentOutput, ProviderError>;

    async fn authorize_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<AuthorizePaymentOutput, ProviderError>;

    async fn capture_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn cancel_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn refund_payment(
        &self,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn retrieve_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn get_payment_status(
        &self,
        data: &PaymentSessionData,
    ) -> Result<PaymentSessionStatus, ProviderError>;

    async fn delete_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn update_payment(
        &self,
        currency_code: &str,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError>;

    async fn webhook_action_and_data(
        &self,
        payload: &serde_json::Value,
    ) -> Result<WebhookActionResult, ProviderError>;
}
