use actix_web::{get, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::item::ItemResource;
use crate::types::resource::{collection, Document};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[get("/{id}/items")]
pub async fn items(
    db: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> ApiResult<Document<Vec<ItemResource>>> {
    let id = parse_id(&path)?;
    let items = db.list_merchant_items(id).await?;
    Ok(ApiResponse::Ok(collection(items)))
}
