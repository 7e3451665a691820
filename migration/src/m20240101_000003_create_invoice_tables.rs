use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Merchant {
    #[sea_orm(iden = "merchants")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Item {
    #[sea_orm(iden = "items")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Invoice {
    #[sea_orm(iden = "invoices")]
    Table,
    Id,
    CustomerId,
    MerchantId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvoiceItem {
    #[sea_orm(iden = "invoice_items")]
    Table,
    Id,
    InvoiceId,
    ItemId,
    Quantity,
    UnitPrice,
}

#[derive(DeriveIden)]
enum Transaction {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    InvoiceId,
    Result,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // invoices
        m.create_table(
            Table::create()
                .table(Invoice::Table)
                .if_not_exists()
                .col(ColumnDef::new(Invoice::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Invoice::CustomerId).integer().not_null())
                .col(ColumnDef::new(Invoice::MerchantId).integer().not_null())
                .col(ColumnDef::new(Invoice::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Invoice::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invoices_merchant")
                        .from(Invoice::Table, Invoice::MerchantId)
                        .to(Merchant::Table, Merchant::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // invoice_items
        m.create_table(
            Table::create()
                .table(InvoiceItem::Table)
                .if_not_exists()
                .col(ColumnDef::new(InvoiceItem::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(InvoiceItem::InvoiceId).integer().not_null())
                .col(ColumnDef::new(InvoiceItem::ItemId).integer().not_null())
                .col(ColumnDef::new(InvoiceItem::Quantity).integer().not_null())
                .col(ColumnDef::new(InvoiceItem::UnitPrice).decimal_len(10, 2).not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invoice_items_invoice")
                        .from(InvoiceItem::Table, InvoiceItem::InvoiceId)
                        .to(Invoice::Table, Invoice::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invoice_items_item")
                        .from(InvoiceItem::Table, InvoiceItem::ItemId)
                        .to(Item::Table, Item::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_invoice_items_invoice_id")
                .table(InvoiceItem::Table)
                .col(InvoiceItem::InvoiceId)
                .to_owned(),
        ).await?;

        // transactions
        m.create_table(
            Table::create()
                .table(Transaction::Table)
                .if_not_exists()
                .col(ColumnDef::new(Transaction::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Transaction::InvoiceId).integer().not_null())
                .col(ColumnDef::new(Transaction::Result).string().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_transactions_invoice")
                        .from(Transaction::Table, Transaction::InvoiceId)
                        .to(Invoice::Table, Invoice::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_transactions_invoice_result")
                .table(Transaction::Table)
                .col(Transaction::InvoiceId)
                .col(Transaction::Result)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Transaction::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(InvoiceItem::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Invoice::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
