use crate::db::catalog_service::CatalogService;
use crate::types::error::AppError;
use crate::types::invoice::{InvoiceRevenue, NewInvoice, NewInvoiceItem, NewTransaction, RevenueQuery};
use crate::types::item::check_unit_price;
use chrono::Utc;
use entity::invoice::{ActiveModel as InvoiceActive, Entity as Invoice, Model as InvoiceModel};
use entity::invoice_item::{ActiveModel as InvoiceItemActive, Entity as InvoiceItem, Model as InvoiceItemModel};
use entity::transaction::{ActiveModel as TransactionActive, Entity as Transaction, Model as TransactionModel, TransactionResult};
use entity::{invoice, invoice_item, transaction};
use sea_orm::sea_query::{Alias, Expr, Func, Query, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

const REVENUE: &str = "revenue";

// Σ quantity × unit_price, rounded back to cents so equal totals compare equal on every backend.
fn revenue_expr() -> SimpleExpr {
    let line_total = Expr::col((InvoiceItem, invoice_item::Column::Quantity))
        .mul(Expr::col((InvoiceItem, invoice_item::Column::UnitPrice)));
    Func::round_with_precision(Func::sum(line_total), 2).into()
}

// EXISTS (a successful transaction for this invoice). A subquery rather than a join,
// so several successful transactions do not multiply the line sum.
fn is_paid() -> SimpleExpr {
    Expr::exists(
        Query::select()
            .expr(Expr::val(1))
            .from(Transaction)
            .and_where(
                Expr::col((Transaction, transaction::Column::InvoiceId))
                    .equals((Invoice, invoice::Column::Id)),
            )
            .and_where(transaction::Column::Result.eq(TransactionResult::Success))
            .to_owned(),
    )
}

impl CatalogService {
    pub async fn get_invoice(&self, id: i32) -> Result<InvoiceModel, AppError> {
        Ok(Invoice::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Invoice does not exist".into()))?)
    }

    pub async fn create_invoice(&self, payload: NewInvoice) -> Result<InvoiceModel, AppError> {
        if !self.merchant_exists(payload.merchant_id).await? {
            return Err(AppError::Validation("merchant_id must reference an existing merchant".into()));
        }
        let now = Utc::now();
        Ok(InvoiceActive {
            customer_id: Set(payload.customer_id),
            merchant_id: Set(payload.merchant_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn add_invoice_item(&self, payload: NewInvoiceItem) -> Result<InvoiceItemModel, AppError> {
        if payload.quantity < 1 {
            return Err(AppError::Validation("quantity must be at least 1".into()));
        }
        let unit_price = check_unit_price(payload.unit_price)?;
        if Invoice::find_by_id(payload.invoice_id).count(&self.db).await? == 0 {
            return Err(AppError::Validation("invoice_id must reference an existing invoice".into()));
        }
        if entity::item::Entity::find_by_id(payload.item_id).count(&self.db).await? == 0 {
            return Err(AppError::Validation("item_id must reference an existing item".into()));
        }

        Ok(InvoiceItemActive {
            invoice_id: Set(payload.invoice_id),
            item_id: Set(payload.item_id),
            quantity: Set(payload.quantity),
            unit_price: Set(unit_price),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn record_transaction(&self, payload: NewTransaction) -> Result<TransactionModel, AppError> {
        if Invoice::find_by_id(payload.invoice_id).count(&self.db).await? == 0 {
            return Err(AppError::Validation("invoice_id must reference an existing invoice".into()));
        }
        Ok(TransactionActive {
            invoice_id: Set(payload.invoice_id),
            result: Set(payload.result),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Top invoices by realized revenue. Only invoices with a successful transaction count,
    /// and an invoice without line items has no revenue to rank. Equal revenues keep id order.
    pub async fn most_expensive_invoices(&self, query: &RevenueQuery) -> Result<Vec<InvoiceRevenue>, AppError> {
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        Ok(Invoice::find()
            .select_only()
            .columns([invoice::Column::Id, invoice::Column::CustomerId, invoice::Column::MerchantId])
            .column_as(revenue_expr(), REVENUE)
            .join(JoinType::InnerJoin, invoice::Relation::InvoiceItem.def())
            .filter(is_paid())
            .group_by(invoice::Column::Id)
            .order_by(Expr::col(Alias::new(REVENUE)), query.direction.order())
            .order_by_asc(invoice::Column::Id)
            .limit(query.limit)
            .into_model::<InvoiceRevenue>()
            .all(&self.db)
            .await?)
    }
}

