use crate::db::catalog_service::CatalogService;
use crate::db::item::contains_ci;
use crate::types::error::AppError;
use crate::types::merchant::{CreateMerchant, MerchantFilter, UpdateMerchant};
use chrono::Utc;
use entity::item::Model as ItemModel;
use entity::merchant::{ActiveModel as MerchantActive, Column, Entity as Merchant, Model as MerchantModel};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl CatalogService {
    pub async fn merchant_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Merchant::find_by_id(id).count(&self.db).await? > 0)
    }

    pub async fn get_all_merchants(&self) -> Result<Vec<MerchantModel>, AppError> {
        Ok(Merchant::find().order_by_asc(Column::Id).all(&self.db).await?)
    }

    pub async fn get_merchant(&self, id: i32) -> Result<MerchantModel, AppError> {
        Ok(Merchant::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Merchant does not exist".into()))?)
    }

    pub async fn list_merchant_items(&self, id: i32) -> Result<Vec<ItemModel>, AppError> {
        let merchant = self.get_merchant(id).await?;
        Ok(merchant
            .find_related(entity::item::Entity)
            .order_by_asc(entity::item::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Every merchant whose name contains the fragment, ignoring case, oldest first.
    pub async fn search_merchants(&self, filter: &MerchantFilter) -> Result<Vec<MerchantModel>, AppError> {
        let mut query = Merchant::find();
        if let Some(fragment) = filter.fragment() {
            query = query.filter(contains_ci(self.db.get_database_backend(), Column::Name, fragment));
        }
        Ok(query.order_by_asc(Column::Id).all(&self.db).await?)
    }

    pub async fn create_merchant(&self, payload: CreateMerchant) -> Result<MerchantModel, AppError> {
        let name = payload.validate()?;
        let now = Utc::now();
        Ok(MerchantActive {
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn update_merchant(&self, id: i32, patch: UpdateMerchant) -> Result<MerchantModel, AppError> {
        let mut am: MerchantActive = self.get_merchant(id).await?.into();
        patch.validate()?;
        if let Some(name) = patch.name { am.name = Set(name); }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Removes the merchant along with its items and invoices.
    pub async fn delete_merchant(&self, id: i32) -> Result<MerchantModel, AppError> {
        let merchant = self.get_merchant(id).await?;
        Merchant::delete_by_id(id).exec(&self.db).await?;
        Ok(merchant)
    }
}
