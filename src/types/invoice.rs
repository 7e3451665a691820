use entity::transaction::TransactionResult;
use rust_decimal::Decimal;
use sea_orm::{FromQueryResult, Order};
use serde::{Serialize, Deserialize};
use crate::types::error::AppError;
use crate::types::resource::Resource;

pub const INVOICE_TYPE: &str = "invoice";
pub const DEFAULT_RANKING_LIMIT: u64 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl Direction {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(AppError::InvalidParameters(format!("unknown direction {:?}", raw))),
        }
    }

    pub fn order(self) -> Order {
        match self {
            Direction::Ascending => Order::Asc,
            Direction::Descending => Order::Desc,
        }
    }
}

/// Raw `/invoices/most_expensive` query string.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RevenueParams {
    pub limit: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueQuery {
    pub limit: u64,
    pub direction: Direction,
}

impl Default for RevenueQuery {
    fn default() -> Self {
        Self { limit: DEFAULT_RANKING_LIMIT, direction: Direction::default() }
    }
}

impl RevenueQuery {
    pub fn parse(params: &RevenueParams) -> Result<Self, AppError> {
        let limit = match params.limit.as_deref() {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::InvalidParameters("limit must be a non-negative integer".into())
            })?,
            None => DEFAULT_RANKING_LIMIT,
        };
        let direction = params.direction.as_deref().map(Direction::parse).transpose()?.unwrap_or_default();
        Ok(Self { limit, direction })
    }
}

/// An invoice row together with its realized revenue, as read from the ranking query.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct InvoiceRevenue {
    pub id: i32,
    pub customer_id: i32,
    pub merchant_id: i32,
    pub revenue: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceAttributes {
    pub customer_id: i32,
    pub merchant_id: i32,
    pub revenue: Decimal,
}

pub type InvoiceResource = Resource<InvoiceAttributes>;

impl From<InvoiceRevenue> for InvoiceResource {
    fn from(ranked: InvoiceRevenue) -> Self {
        Resource::new(ranked.id, INVOICE_TYPE, InvoiceAttributes {
            customer_id: ranked.customer_id,
            merchant_id: ranked.merchant_id,
            revenue: ranked.revenue,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: i32,
    pub merchant_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewInvoiceItem {
    pub invoice_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewTransaction {
    pub invoice_id: i32,
    pub result: TransactionResult,
}
