use crate::db::catalog_service::CatalogService;
use crate::types::error::AppError;
use crate::types::item::{CreateItem, ItemCriteria, ItemFilter, UpdateItem};
use chrono::Utc;
use entity::item::{ActiveModel as ItemActive, Column, Entity as Item, Model as ItemModel};
use entity::merchant::Model as MerchantModel;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use tracing::debug;

/// Case-insensitive containment on `column`.
///
/// Postgres gets `ILIKE`, which folds case by the database's locale. SQLite's `lower()` only
/// folds ASCII, so there the fragment is folded the same way: `é` does not match `É`.
pub(crate) fn contains_ci<C: ColumnTrait>(backend: DbBackend, column: C, fragment: &str) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => Expr::col(column).ilike(format!("%{}%", fragment)),
        _ => Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", fragment.to_ascii_lowercase())),
    }
}

// Price searches return the alphabetically first match; id settles equal names.
fn by_name(select: Select<Item>) -> Select<Item> {
    select.order_by_asc(Column::Name).order_by_asc(Column::Id)
}

impl CatalogService {
    pub async fn get_all_items(&self) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find().order_by_asc(Column::Id).all(&self.db).await?)
    }

    pub async fn count_items(&self) -> Result<u64, AppError> {
        Ok(Item::find().count(&self.db).await?)
    }

    pub async fn get_item(&self, id: i32) -> Result<ItemModel, AppError> {
        Ok(Item::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Item does not exist".into()))?)
    }

    pub async fn get_item_merchant(&self, id: i32) -> Result<MerchantModel, AppError> {
        let item = self.get_item(id).await?;
        Ok(item
            .find_related(entity::merchant::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Merchant does not exist".into()))?)
    }

    pub async fn create_item(&self, payload: CreateItem) -> Result<ItemModel, AppError> {
        let item = payload.validate()?;
        if !self.merchant_exists(item.merchant_id).await? {
            return Err(AppError::Validation("merchant_id must reference an existing merchant".into()));
        }

        let now = Utc::now();
        let created = ItemActive {
            name: Set(item.name),
            description: Set(item.description),
            unit_price: Set(item.unit_price),
            merchant_id: Set(item.merchant_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("created item {}", created.id);
        Ok(created)
    }

    pub async fn update_item(&self, id: i32, patch: UpdateItem) -> Result<ItemModel, AppError> {
        // fetch the current row
        let current = self.get_item(id).await?;

        if let Some(merchant_id) = patch.merchant_id {
            if !self.merchant_exists(merchant_id).await? {
                return Err(AppError::MissingReference("merchant"));
            }
        }
        let patch = patch.validate()?;

        // convert to ActiveModel
        let mut model: ItemActive = current.into();

        if let Some(v) = patch.name { model.name = Set(v); }
        if let Some(v) = patch.description { model.description = Set(v); }
        if let Some(v) = patch.unit_price { model.unit_price = Set(v); }
        if let Some(v) = patch.merchant_id { model.merchant_id = Set(v); }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&self.db).await?)
    }

    /// Probes first so a missing id is reported instead of silently deleting nothing.
    pub async fn delete_item(&self, id: i32) -> Result<ItemModel, AppError> {
        let item = self.get_item(id).await?;
        Item::delete_by_id(id).exec(&self.db).await?;
        debug!("deleted item {}", id);
        Ok(item)
    }

    /// Resolves a filter to at most one item. `Ok(None)` means no match.
    pub async fn find_item(&self, filter: &ItemFilter) -> Result<Option<ItemModel>, AppError> {
        filter.validate()?;

        let query = match filter.criteria() {
            ItemCriteria::NameFragment(fragment) => Item::find()
                .filter(contains_ci(self.db.get_database_backend(), Column::Name, fragment))
                .order_by_asc(Column::Id),
            ItemCriteria::PriceBetween(min, max) => by_name(
                Item::find()
                    .filter(Column::UnitPrice.gte(min))
                    .filter(Column::UnitPrice.lte(max)),
            ),
            ItemCriteria::PriceAtLeast(min) => by_name(Item::find().filter(Column::UnitPrice.gte(min))),
            ItemCriteria::PriceAtMost(max) => by_name(Item::find().filter(Column::UnitPrice.lte(max))),
            ItemCriteria::Nothing => return Ok(None),
        };

        Ok(query.one(&self.db).await?)
    }
}
