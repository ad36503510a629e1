use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use commerce_extensions::accounts;
use commerce_extensions::analytics::service::AnalyticsService;
use commerce_extensions::config::AppConfig;
use commerce_extensions::provider::bank_transfer::BankTransferProvider;
use commerce_extensions::repo::customers_repo::CustomersRepo;
use commerce_extensions::repo::orders_repo::OrdersRepo;
use commerce_extensions::repo::products_repo::ProductsRepo;
use commerce_extensions::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let registry = accounts::bundled_registry();
    let provider = Arc::new(BankTransferProvider::new(registry.clone()));

    let analytics = AnalyticsService::new(
        Arc::new(OrdersRepo { pool: pool.clone() }),
        Arc::new(CustomersRepo { pool: pool.clone() }),
        Arc::new(ProductsRepo { pool: pool.clone() }),
    );

    let state = AppState {
        analytics,
        provider,
        registry,
        pool: pool.clone(),
    };

    // Capture and refund are manual back-office actions; they live behind the
    // admin key together with the dashboard.
    let admin_routes = Router::new()
        .route(
            "/admin/analytics",
            get(commerce_extensions::http::handlers::analytics::get_analytics)
                .post(commerce_extensions::http::handlers::analytics::post_analytics),
        )
        .route(
            "/admin/payment-sessions/capture",
            post(commerce_extensions::http::handlers::payment_sessions::capture),
        )
        .route(
            "/admin/payment-sessions/refund",
            post(commerce_extensions::http::handlers::payment_sessions::refund),
        )
        .layer(from_fn_with_state(
            cfg.admin_api_key.clone(),
            commerce_extensions::http::middleware::admin_auth::require_admin_api_key,
        ));

    let app = Router::new()
        .route("/health", get(commerce_extensions::http::handlers::ops::health))
        .route("/ops/readiness", get(commerce_extensions::http::handlers::ops::readiness))
        .route("/ops/liveness", get(commerce_extensions::http::handlers::ops::liveness))
        .route(
            "/store/bank-accounts",
            get(commerce_extensions::http::handlers::bank_accounts::list_bank_accounts),
        )
        .route(
            "/store/payment-sessions",
            post(commerce_extensions::http::handlers::payment_sessions::initiate),
        )
        .route(
            "/store/payment-sessions/authorize",
            post(commerce_extensions::http::handlers::payment_sessions::authorize),
        )
        .route(
            "/store/payment-sessions/cancel",
            post(commerce_extensions::http::handlers::payment_sessions::cancel),
        )
        .route(
            "/store/payment-sessions/update",
            post(commerce_extensions::http::handlers::payment_sessions::update),
        )
        .route(
            "/store/payment-sessions/status",
            post(commerce_extensions::http::handlers::payment_sessions::status),
        )
        .route(
            "/store/payment-sessions/webhook",
            post(commerce_extensions::http::handlers::payment_sessions::webhook),
        )
        .route("/pages/about", get(commerce_extensions::http::handlers::pages::about))
        .route("/pages/contact", get(commerce_extensions::http::handlers::pages::contact))
        .merge(admin_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
