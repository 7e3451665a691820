use actix_web::{patch, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::item::{ItemResource, UpdateItem};
use crate::types::resource::Document;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[patch("/{id}")]
pub async fn update(
    db: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
    body: web::Json<UpdateItem>,
) -> ApiResult<Document<ItemResource>> {
    let id = parse_id(&path)?;
    let item = db.update_item(id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(Document::new(item.into())))
}
