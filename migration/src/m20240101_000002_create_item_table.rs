use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Item::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Item::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Description)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::UnitPrice)
                            .decimal_len(10, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::MerchantId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_merchant")
                            .from(Item::Table, Item::MerchantId)
                            .to(Merchant::Table, Merchant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_merchant_id")
                    .table(Item::Table)
                    .col(Item::MerchantId)
                    .to_owned()
            )
            .await?;

        // price searches filter and sort on these
        manager
            .create_index(
                Index::create()
                    .name("idx_items_unit_price")
                    .table(Item::Table)
                    .col(Item::UnitPrice)
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Item::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    #[sea_orm(iden = "items")]
    Table,
    Id,
    Name,
    Description,
    UnitPrice,
    MerchantId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Merchant {
    #[sea_orm(iden = "merchants")]
    Table,
    Id,
}
