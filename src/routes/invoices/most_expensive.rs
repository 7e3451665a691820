use actix_web::{get, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::invoice::{InvoiceResource, RevenueParams, RevenueQuery};
use crate::types::resource::{collection, Document};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/most_expensive")]
pub async fn most_expensive(
    db: web::Data<Arc<CatalogService>>,
    query: web::Query<RevenueParams>,
) -> ApiResult<Document<Vec<InvoiceResource>>> {
    let query = RevenueQuery::parse(&query)?;
    let ranked = db.most_expensive_invoices(&query).await?;
    Ok(ApiResponse::Ok(collection(ranked)))
}
