use crate::accounts::BankAccount;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BankAccountsQuery {
    pub currency: Option<String>,
}

/// Accounts shown at checkout so the shopper knows where to wire the funds.
pub async fn list_bank_accounts(
    State(state): State<AppState>,
    Query(query): Query<BankAccountsQuery>,
) -> impl IntoResponse {
    let accounts: Vec<BankAccount> = match query.currency.as_deref() {
        Some(code) if !code.is_empty() && code != "all" => state
            .registry
            .by_currency(code)
            .into_iter()
            .cloned()
            .collect(),
        _ => state.registry.all().to_vec(),
    };

    Json(serde_json::json!({ "bankAccounts": accounts }))
}
