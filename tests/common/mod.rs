use std::sync::Arc;
use catalog_api::db::catalog_service::CatalogService;
use sea_orm::ConnectOptions;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<CatalogService>,
    pub _container: Option<ContainerAsync<Postgres>>,
}

#[allow(dead_code)]
impl TestContext {
    /// In-memory SQLite by default; a throwaway Postgres with `--features postgres-tests`.
    pub async fn new() -> TestContext {
        if cfg!(feature = "postgres-tests") {
            Self::postgres().await
        } else {
            Self::sqlite().await
        }
    }

    pub async fn sqlite() -> TestContext {
        // one pooled connection: every sqlite in-memory connection is its own database
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            CatalogService::connect(opts)
                .await
                .expect("Failed to initialize CatalogService")
        );

        TestContext { db, _container: None }
    }

    pub async fn postgres() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            CatalogService::new(&db_url, 5)
                .await
                .expect("Failed to initialize CatalogService")
        );

        TestContext { db, _container: Some(container) }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use catalog_api::types::item::CreateItem;
    use catalog_api::types::merchant::CreateMerchant;
    use rust_decimal::Decimal;

    pub fn price(raw: &str) -> Decimal {
        raw.parse().expect("test prices are valid decimals")
    }

    pub fn sample_merchant(name: &str) -> CreateMerchant {
        CreateMerchant { name: Some(name.to_string()) }
    }

    pub fn sample_item(merchant_id: i32, name: &str, unit_price: &str) -> CreateItem {
        CreateItem {
            name: Some(name.to_string()),
            description: Some(format!("Description of {}", name)),
            unit_price: Some(price(unit_price)),
            merchant_id: Some(merchant_id),
        }
    }
}
