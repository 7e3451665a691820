use crate::utils::webutils::{json_error, query_error};
use actix_web::web;

pub mod health;
pub mod invoices;
pub mod items;
pub mod merchants;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/v1")
            .service(
                // fixed paths first so they are not captured by /{id}
                web::scope("/items")
                    .service(items::find::find)
                    .service(items::list::list)
                    .service(items::create::create)
                    .service(items::merchant::merchant)
                    .service(items::show::show)
                    .service(items::update::update)
                    .service(items::delete::delete)
            )
            .service(
                web::scope("/merchants")
                    .service(merchants::find_all::find_all)
                    .service(merchants::list::list)
                    .service(merchants::items::items)
                    .service(merchants::show::show)
            )
            .service(
                web::scope("/invoices")
                    .service(invoices::most_expensive::most_expensive)
            )
    );
}
