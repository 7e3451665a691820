use actix_web::{get, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::item::ItemResource;
use crate::types::resource::{collection, Document};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(
    db: web::Data<Arc<CatalogService>>,
) -> ApiResult<Document<Vec<ItemResource>>> {
    let items = db.get_all_items().await?;
    Ok(ApiResponse::Ok(collection(items)))
}
