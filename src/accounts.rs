use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Static bank-account reference data. Shipped with the deployment,
/// immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub swift_code: String,
    pub currency: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRegistry {
    bank_accounts: Vec<BankAccount>,
}

impl BankAccountRegistry {
    pub fn new(bank_accounts: Vec<BankAccount>) -> Self {
        Self { bank_accounts }
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let registry: BankAccountRegistry = serde_json::from_str(raw)?;
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&BankAccount> {
        self.bank_accounts.iter().find(|account| account.id == id)
    }

    pub fn by_currency(&self, currency: &str) -> Vec<&BankAccount> {
        self.bank_accounts
            .iter()
            .filter(|account| account.currency.eq_ignore_ascii_case(currency))
            .collect()
    }

    pub fn all(&self) -> &[BankAccount] {
        &self.bank_accounts
    }
}

const BUNDLED_ACCOUNTS: &str = include_str!("../config/bank-accounts.json");

static REGISTRY: OnceLock<Arc<BankAccountRegistry>> = OnceLock::new();

/// The bundled registry, parsed once on first access.
pub fn bundled_registry() -> Arc<BankAccountRegistry> {
    REGISTRY
        .get_or_init(|| {
            Arc::new(
                BankAccountRegistry::from_json(BUNDLED_ACCOUNTS)
                    .expect("bundled bank-accounts.json is malformed"),
            )
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_accounts_parse() {
        let registry = bundled_registry();
        assert!(!registry.all().is_empty());
    }

    #[test]
    fn lookup_by_id_and_currency() {
        let registry = BankAccountRegistry::new(vec![
            account("acct-usd", "usd"),
            account("acct-eur", "eur"),
            account("acct-usd-2", "usd"),
        ]);

        assert_eq!(registry.get("acct-eur").map(|a| a.currency.as_str()), Some("eur"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.by_currency("USD").len(), 2);
        assert!(registry.by_currency("gbp").is_empty());
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
}
