use actix_web::{get, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::merchant::{MerchantFilter, MerchantResource};
use crate::types::resource::{collection, Document};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/find_all")]
pub async fn find_all(
    db: web::Data<Arc<CatalogService>>,
    query: web::Query<MerchantFilter>,
) -> ApiResult<Document<Vec<MerchantResource>>> {
    let merchants = db.search_merchants(&query).await?;
    Ok(ApiResponse::Ok(collection(merchants)))
}
