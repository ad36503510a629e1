pub mod accounts;
pub mod analytics;
pub mod config;
pub mod domain {
    pub mod order;
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod analytics;
        pub mod bank_accounts;
        pub mod ops;
        pub mod pages;
        pub mod payment_sessions;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
}
pub mod provider;
pub mod repo;

use crate::accounts::BankAccountRegistry;
use crate::analytics::service::AnalyticsService;
use crate::provider::bank_transfer::BankTransferProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analytics: AnalyticsService,
    pub provider: Arc<BankTransferProvider>,
    pub registry: Arc<BankAccountRegistry>,
    pub pool: sqlx::PgPool,
}
