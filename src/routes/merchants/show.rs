use actix_web::{get, web};
use std::sync::Arc;

use crate::db::catalog_service::CatalogService;
use crate::types::merchant::MerchantResource;
use crate::types::resource::Document;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[get("/{id}")]
pub async fn show(
    db: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> ApiResult<Document<MerchantResource>> {
    let id = parse_id(&path)?;
    let merchant = db.get_merchant(id).await?;
    Ok(ApiResponse::Ok(Document::new(merchant.into())))
}
