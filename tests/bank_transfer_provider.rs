use commerce_extensions::accounts::{BankAccount, BankAccountRegistry};
use commerce_extensions::domain::payment::{
    BusinessStatus, PaymentSessionData, PaymentSessionStatus,
};
use commerce_extensions::provider::bank_transfer::BankTransferProvider;
use commerce_extensions::provider::{PaymentProvider, ProviderError, WebhookAction};
use std::sync::Arc;

#[tokio::test]
async fn capture_after_initiate_and_authorize_embeds_configured_account() {
    let provider = provider();

    let initiated = provider
        .initiate_payment("usd", 12_500, with_account("acct-usd"))
        .await
        .unwrap();
    assert!(initiated.id.starts_with("bank_transfer_"));
    assert_eq!(initiated.data.status, BusinessStatus::Pending);
    assert_eq!(initiated.data.amount_minor, Some(12_500));
    assert_eq!(initiated.data.currency_code.as_deref(), Some("usd"));

    let authorized = provider.authorize_payment(initiated.data).await.unwrap();
    assert_eq!(authorized.status, PaymentSessionStatus::Authorized);
    assert_eq!(authorized.data.status, BusinessStatus::Pending);

    let captured = provider.capture_payment(authorized.data).await.unwrap();
    assert_eq!(captured.status, BusinessStatus::Captured);
    assert!(captured.captured_at.is_some());
    assert_eq!(captured.bank_account, Some(account("acct-usd", "usd")));
}

#[tokio::test]
async fn capture_resolves_account_from_id_when_not_embedded() {
    let provider = provider();
    let data = with_account("acct-eur");

    let captured = provider.capture_payment(data).await.unwrap();
    assert_eq!(captured.bank_account, Some(account("acct-eur", "eur")));
}

#[tokio::test]
async fn unknown_account_is_rejected_at_every_step() {
    let provider = provider();
    let data = with_account("acct-missing");

    let err = provider
        .initiate_payment("usd", 100, data.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidSelection(_)));

    let err = provider.authorize_payment(data.clone()).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidSelection(_)));

    let err = provider.capture_payment(data).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidSelection(_)));
}

#[tokio::test]
async fn selection_is_optional_before_capture() {
    let provider = provider();

    let initiated = provider
        .initiate_payment("usd", 5_000, PaymentSessionData::default())
        .await
        .unwrap();
    assert!(initiated.data.bank_account.is_none());

    let authorized = provider.authorize_payment(initiated.data).await.unwrap();
    assert_eq!(authorized.status, PaymentSessionStatus::Authorized);
}

#[tokio::test]
async fn cancel_and_delete_are_idempotent() {
    let provider = provider();

    let once = provider
        .cancel_payment(PaymentSessionData::default())
        .await
        .unwrap();
    let twice = provider.cancel_payment(once.clone()).await.unwrap();
    assert_eq!(once.status, BusinessStatus::Canceled);
    assert_eq!(twice.status, BusinessStatus::Canceled);

    let deleted = provider.delete_payment(twice).await.unwrap();
    let deleted_again = provider.delete_payment(deleted.clone()).await.unwrap();
    assert_eq!(deleted.status, BusinessStatus::Canceled);
    assert_eq!(deleted_again.status, BusinessStatus::Canceled);
    assert!(deleted_again.deleted_at.is_some());
}

#[tokio::test]
async fn refund_is_stamped_but_stays_pending() {
    let provider = provider();

    let refunded = provider
        .refund_payment(3_000, with_account("acct-usd"))
        .await
        .unwrap();
    assert_eq!(refunded.refund_amount_minor, Some(3_000));
    assert_eq!(refunded.refund_status, Some(BusinessStatus::Pending));
    assert!(refunded.refunded_at.is_some());
}

#[tokio::test]
async fn update_stamps_new_amount_and_currency() {
    let provider = provider();

    let updated = provider
        .update_payment("eur", 9_900, PaymentSessionData::default())
        .await
        .unwrap();
    assert_eq!(updated.amount_minor, Some(9_900));
    assert_eq!(updated.currency_code.as_deref(), Some("eur"));
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn retrieve_echoes_the_session_unchanged() {
    let provider = provider();
    let data = with_account("acct-usd");

    let echoed = provider.retrieve_payment(data.clone()).await.unwrap();
    assert_eq!(echoed, data);
}

#[tokio::test]
async fn status_defaults_to_pending_for_an_empty_session() {
    let provider = provider();

    let status = provider
        .get_payment_status(&PaymentSessionData::default())
        .await
        .unwrap();
    assert_eq!(status, PaymentSessionStatus::Pending);
}

#[tokio::test]
async fn webhook_is_a_structural_noop() {
    let provider = provider();

    let result = provider
        .webhook_action_and_data(&serde_json::json!({ "id": "sess_42" }))
        .await
        .unwrap();
    assert_eq!(result.action, WebhookAction::Authorized);
    assert_eq!(result.session_id, "sess_42");
    assert_eq!(result.amount_minor, 0);

    let result = provider
        .webhook_action_and_data(&serde_json::json!({}))
        .await
        .unwrap();
    assert_eq!(result.session_id, "");
}

fn provider() -> BankTransferProvider {
    BankTransferProvider::new(Arc::new(BankAccountRegistry::new(vec![
        account("acct-usd", "usd"),
        account("acct-eur", "eur"),
    ])))
}

fn with_account(id: &str) -> PaymentSessionData {
    PaymentSessionData {
        bank_account_id: Some(id.to_string()),
        ..Default::default()
    }
}

fn account(id: &str, currency: &str) -> BankAccount {
    BankAccount {
        id: id.to_string(),
        bank_name: "Test Bank".to_string(),
        account_name: "Test Co".to_string(),
        account_number: "000111222".to_string(),
        routing_number: "12345678".to_string(),
        swift_code: "TESTUS33".to_string(),
        currency: currency.to_string(),
        address: "1 Test Street".to_string(),
    }
}
