use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Handle to the record store. Holds nothing but the connection pool.
#[derive(Clone)]
pub struct CatalogService {
    pub(crate) db: DatabaseConnection,
}

impl CatalogService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_owned());
        opts.max_connections(max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        Self::connect(opts).await
    }

    pub async fn connect(opts: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
