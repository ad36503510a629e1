use crate::accounts::{BankAccount, BankAccountRegistry};
use crate::domain::payment::{BusinessStatus, PaymentSessionData, PaymentSessionStatus};
use crate::provider::{
    AuthorizePaymentOutput, InitiatePaymentOutput, PaymentProvider, ProviderError, WebhookAction,
    WebhookActionResult,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Manual/offline settlement provider. Funds never move through this
/// service; capture is an admin action confirming a transfer arrived.
pub struct BankTransferProvider {
    registry: Arc<BankAccountRegistry>,
}

impl BankTransferProvider {
    pub const IDENTIFIER: &'static str = "bank-transfer";

    pub fn new(registry: Arc<BankAccountRegistry>) -> Self {
        Self { registry }
    }

    fn resolve_account(&self, id: &str) -> Result<BankAccount, ProviderError> {
        self.registry
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::InvalidSelection(id.to_string()))
    }

    // Account selection is optional until capture; an id that is present
    // must resolve, an absent id passes through.
    fn resolve_optional(
        &self,
        data: &PaymentSessionData,
    ) -> Result<Option<BankAccount>, ProviderError> {
        match &data.bank_account_id {
            Some(id) => Ok(Some(self.resolve_account(id)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PaymentProvider for BankTransferProvider {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    async fn initiate_payment(
        &self,
        currency_code: &str,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<InitiatePaymentOutput, ProviderError> {
        let bank_account = self.resolve_optional(&data)?;

        Ok(InitiatePaymentOutput {
            id: format!("bank_transfer_{}", Utc::now().timestamp_millis()),
            data: PaymentSessionData {
                bank_account,
                status: BusinessStatus::Pending,
                amount_minor: Some(amount_minor),
                currency_code: Some(currency_code.to_string()),
                ..data
            },
        })
    }

    async fn authorize_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<AuthorizePaymentOutput, ProviderError> {
        let bank_account = self.resolve_optional(&data)?;

        // Authorized at the protocol level so the order can proceed, but the
        // business status stays pending: a transfer cannot be confirmed yet.
        Ok(AuthorizePaymentOutput {
            status: PaymentSessionStatus::Authorized,
            data: PaymentSessionData {
                bank_account,
                status: BusinessStatus::Pending,
                ..data
            },
        })
    }

    async fn capture_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        let bank_account = match (&data.bank_account, &data.bank_account_id) {
            (Some(account), _) => Some(account.clone()),
            (None, Some(id)) => Some(self.resolve_account(id)?),
            (None, None) => None,
        };

        Ok(PaymentSessionData {
            bank_account,
            status: BusinessStatus::Captured,
            captured_at: Some(Utc::now()),
            ..data
        })
    }

    async fn cancel_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        Ok(PaymentSessionData {
            status: BusinessStatus::Canceled,
            canceled_at: Some(Utc::now()),
            ..data
        })
    }

    async fn refund_payment(
        &self,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        // Refunds are settled manually outside the system.
        Ok(PaymentSessionData {
            refund_amount_minor: Some(amount_minor),
            refund_status: Some(BusinessStatus::Pending),
            refunded_at: Some(Utc::now()),
            ..data
        })
    }

    async fn retrieve_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        Ok(data)
    }

    async fn get_payment_status(
        &self,
        data: &PaymentSessionData,
    ) -> Result<PaymentSessionStatus, ProviderError> {
        Ok(data.session_status())
    }

    async fn delete_payment(
        &self,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        Ok(PaymentSessionData {
            status: BusinessStatus::Canceled,
            deleted_at: Some(Utc::now()),
            ..data
        })
    }

    async fn update_payment(
        &self,
        currency_code: &str,
        amount_minor: i64,
        data: PaymentSessionData,
    ) -> Result<PaymentSessionData, ProviderError> {
        Ok(PaymentSessionData {
            amount_minor: Some(amount_minor),
            currency_code: Some(currency_code.to_string()),
            updated_at: Some(Utc::now()),
            ..data
        })
    }

    async fn webhook_action_and_data(
        &self,
        payload: &serde_json::Value,
    ) -> Result<WebhookActionResult, ProviderError> {
        // Bank transfers have no asynchronous notification channel; the hook
        // exists only to satisfy the contract.
        Ok(WebhookActionResult {
            action: WebhookAction::Authorized,
            session_id: payload
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            amount_minor: 0,
        })
    }
}
