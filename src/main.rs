use actix_web::{middleware::Logger, web, App, HttpServer};
use catalog_api::config::EnvConfig;
use catalog_api::db::catalog_service::CatalogService;
use catalog_api::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let catalog_service = Arc::new(
        CatalogService::new(&config.db_url, config.db_max_connections)
            .await
            .map_err(|e| std::io::Error::other(format!("failed to initialize CatalogService: {}", e)))?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&catalog_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
