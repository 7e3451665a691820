use actix_web::{web, App};
use std::sync::Arc;
use catalog_api::{
    db::catalog_service::CatalogService,
    types::invoice::{NewInvoice, NewInvoiceItem, NewTransaction},
};
use entity::transaction::TransactionResult;

use super::test_data::{price, sample_item, sample_merchant};

pub struct TestClient {
    pub db: Arc<CatalogService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<CatalogService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(catalog_api::routes::configure_routes)
    }

    pub async fn create_merchant(&self, name: &str) -> entity::merchant::Model {
        self.db.create_merchant(sample_merchant(name))
            .await
            .expect("Failed to create merchant")
    }

    pub async fn create_item(&self, merchant_id: i32, name: &str, unit_price: &str) -> entity::item::Model {
        self.db.create_item(sample_item(merchant_id, name, unit_price))
            .await
            .expect("Failed to create item")
    }

    /// Creates an invoice with `(item, quantity, unit_price)` lines and the given transaction results.
    pub async fn create_invoice(
        &self,
        merchant_id: i32,
        lines: &[(i32, i32, &str)],
        results: &[TransactionResult],
    ) -> entity::invoice::Model {
        let invoice = self.db.create_invoice(NewInvoice { customer_id: 1, merchant_id })
            .await
            .expect("Failed to create invoice");

        for &(item_id, quantity, unit_price) in lines {
            self.db.add_invoice_item(NewInvoiceItem { invoice_id: invoice.id, item_id, quantity, unit_price: price(unit_price) })
                .await
                .expect("Failed to add invoice item");
        }
        for &result in results {
            self.db.record_transaction(NewTransaction { invoice_id: invoice.id, result })
                .await
                .expect("Failed to record transaction");
        }

        invoice
    }
}
