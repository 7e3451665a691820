use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,
    pub merchant_id: i32,                 // FK -> merchants.id
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::merchant::Entity",
        from = "Column::MerchantId",
        to   = "super::merchant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Merchant,
    #[sea_orm(has_many = "super::invoice_item::Entity")]
    InvoiceItem,
}

impl Related<super::merchant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Merchant.def() }
}

impl Related<super::invoice_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::InvoiceItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}
