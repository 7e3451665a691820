use actix_web::{get, web};
use std::sync::Arc;
use tracing::debug;

use crate::db::catalog_service::CatalogService;
use crate::types::error::AppError;
use crate::types::item::{ItemFilter, ItemResource, ItemSearchParams};
use crate::types::resource::Document;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/find")]
pub async fn find(
    db: web::Data<Arc<CatalogService>>,
    query: web::Query<ItemSearchParams>,
) -> ApiResult<Document<ItemResource>> {
    let filter = ItemFilter::parse(&query)?;
    debug!("item search {:?}", filter);

    match db.find_item(&filter).await? {
        Some(item) => Ok(ApiResponse::Ok(Document::new(item.into()))),
        None => Err(AppError::NotFound),
    }
}
