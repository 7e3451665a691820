use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::catalog_service::CatalogService;
use crate::types::item::{CreateItem, ItemResource};
use crate::types::resource::Document;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create(
    db: web::Data<Arc<CatalogService>>,
    body: web::Json<CreateItem>,
) -> ApiResult<Document<ItemResource>> {
    let item = db.create_item(body.into_inner()).await?;
    info!("Item {} created for merchant {}", item.id, item.merchant_id);
    Ok(ApiResponse::Created(Document::new(item.into())))
}
