use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;

use crate::db::catalog_service::CatalogService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&path)?;
    db.delete_item(id).await?;
    info!("Item {} deleted", id);
    Ok(ApiResponse::NoContent)
}
