use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use crate::types::error::AppError;
use crate::types::resource::Resource;

pub const ITEM_TYPE: &str = "item";

/// Prices are stored as `decimal(10, 2)`.
pub const PRICE_SCALE: u32 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemAttributes {
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub merchant_id: i32,
}

pub type ItemResource = Resource<ItemAttributes>;

impl From<entity::item::Model> for ItemResource {
    fn from(item: entity::item::Model) -> Self {
        Resource::new(item.id, ITEM_TYPE, ItemAttributes {
            name: item.name,
            description: item.description,
            unit_price: item.unit_price,
            merchant_id: item.merchant_id,
        })
    }
}

/// Create payload as received. Every field is optional here so that a missing field
/// surfaces as a validation error instead of a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
    pub merchant_id: Option<i32>,
}

/// A create payload with every required field present and well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub merchant_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
    pub merchant_id: Option<i32>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".into()));
    }
    Ok(())
}

// Largest value a decimal(10, 2) column holds.
fn max_unit_price() -> Decimal {
    Decimal::new(99_999_999_99, PRICE_SCALE)
}

/// Rounds to cents so every backend stores the same value.
pub(crate) fn check_unit_price(price: Decimal) -> Result<Decimal, AppError> {
    let price = price.round_dp(PRICE_SCALE);
    if price < Decimal::ZERO {
        return Err(AppError::Validation("unit_price must not be negative".into()));
    }
    if price > max_unit_price() {
        return Err(AppError::Validation("unit_price is too large".into()));
    }
    Ok(price)
}

impl CreateItem {
    pub fn validate(self) -> Result<NewItem, AppError> {
        let name = required(self.name, "name")?;
        let description = required(self.description, "description")?;
        let unit_price = required(self.unit_price, "unit_price")?;
        let merchant_id = required(self.merchant_id, "merchant_id")?;

        check_name(&name)?;
        let unit_price = check_unit_price(unit_price)?;

        Ok(NewItem { name, description, unit_price, merchant_id })
    }
}

impl UpdateItem {
    /// Checks only the fields that were supplied; a supplied price comes back rounded to cents.
    pub fn validate(self) -> Result<Self, AppError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        let unit_price = self.unit_price.map(check_unit_price).transpose()?;
        Ok(Self { unit_price, ..self })
    }
}

/// Raw `/items/find` query string. Values stay strings until [`ItemFilter::parse`].
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ItemSearchParams {
    pub name: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ItemFilter {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Which lookup a filter resolves to, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemCriteria<'a> {
    NameFragment(&'a str),
    PriceBetween(Decimal, Decimal),
    PriceAtLeast(Decimal),
    PriceAtMost(Decimal),
    Nothing,
}

// Lenient numeric read, used only for the below-zero check.
fn coerce_price(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

fn parse_price(raw: &str, field: &str) -> Result<Decimal, AppError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidParameters(format!("{} must be a number", field)))
}

impl ItemFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn by_price(min_price: Option<Decimal>, max_price: Option<Decimal>) -> Self {
        Self { name: None, min_price, max_price }
    }

    pub fn parse(params: &ItemSearchParams) -> Result<Self, AppError> {
        let prices = [params.min_price.as_deref(), params.max_price.as_deref()];

        if params.name.is_some() && prices.iter().any(Option::is_some) {
            return Err(AppError::InvalidParameters(
                "name cannot be combined with min_price or max_price".into(),
            ));
        }
        if prices.iter().flatten().any(|raw| coerce_price(raw) < Decimal::ZERO) {
            return Err(AppError::InvalidParameters("prices must not be below zero".into()));
        }

        let filter = ItemFilter {
            name: params.name.clone(),
            min_price: params.min_price.as_deref().map(|raw| parse_price(raw, "min_price")).transpose()?,
            max_price: params.max_price.as_deref().map(|raw| parse_price(raw, "max_price")).transpose()?,
        };
        filter.validate()?;
        Ok(filter)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let has_price = self.min_price.is_some() || self.max_price.is_some();
        if self.name.is_some() && has_price {
            return Err(AppError::InvalidParameters(
                "name cannot be combined with min_price or max_price".into(),
            ));
        }
        if [self.min_price, self.max_price].iter().flatten().any(|p| *p < Decimal::ZERO) {
            return Err(AppError::InvalidParameters("prices must not be below zero".into()));
        }
        Ok(())
    }

    pub fn criteria(&self) -> ItemCriteria<'_> {
        match (&self.name, self.min_price, self.max_price) {
            (Some(name), _, _) => ItemCriteria::NameFragment(name),
            (None, Some(min), Some(max)) => ItemCriteria::PriceBetween(min, max),
            (None, Some(min), None) => ItemCriteria::PriceAtLeast(min),
            (None, None, Some(max)) => ItemCriteria::PriceAtMost(max),
            (None, None, None) => ItemCriteria::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    fn params(name: Option<&str>, min: Option<&str>, max: Option<&str>) -> ItemSearchParams {
        ItemSearchParams {
            name: name.map(String::from),
            min_price: min.map(String::from),
            max_price: max.map(String::from),
        }
    }

    fn assert_invalid(result: Result<ItemFilter, AppError>) {
        match result {
            Err(AppError::InvalidParameters(_)) => {}
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    #[test]
    fn name_with_any_price_is_rejected() {
        assert_invalid(ItemFilter::parse(&params(Some("ring"), Some("1"), None)));
        assert_invalid(ItemFilter::parse(&params(Some("ring"), None, Some("1"))));
        assert_invalid(ItemFilter::parse(&params(Some(""), Some("abc"), Some("-4"))));
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert_invalid(ItemFilter::parse(&params(None, Some("-1"), None)));
        assert_invalid(ItemFilter::parse(&params(None, None, Some("-1"))));
        assert_invalid(ItemFilter::parse(&params(None, Some("5"), Some("-0.01"))));
    }

    #[test]
    fn non_numeric_price_is_an_explicit_error() {
        assert_invalid(ItemFilter::parse(&params(None, Some("abc"), None)));
        assert_invalid(ItemFilter::parse(&params(None, None, Some("NaN"))));
        assert_invalid(ItemFilter::parse(&params(None, None, Some("inf"))));
        assert_invalid(ItemFilter::parse(&params(None, Some("1e400"), None)));
    }

    #[test]
    fn criteria_follow_priority_order() {
        let by_name = ItemFilter::parse(&params(Some("ancy"), None, None)).unwrap();
        assert_eq!(by_name.criteria(), ItemCriteria::NameFragment("ancy"));

        let between = ItemFilter::parse(&params(None, Some("2.5"), Some(" 3 "))).unwrap();
        assert_eq!(between.criteria(), ItemCriteria::PriceBetween(cents("2.5"), cents("3")));

        let at_least = ItemFilter::parse(&params(None, Some("0"), None)).unwrap();
        assert_eq!(at_least.criteria(), ItemCriteria::PriceAtLeast(Decimal::ZERO));

        let at_most = ItemFilter::parse(&params(None, None, Some("10"))).unwrap();
        assert_eq!(at_most.criteria(), ItemCriteria::PriceAtMost(cents("10")));

        let empty = ItemFilter::parse(&params(None, None, None)).unwrap();
        assert_eq!(empty.criteria(), ItemCriteria::Nothing);
    }

    #[test]
    fn empty_name_still_counts_as_a_name_search() {
        let filter = ItemFilter::parse(&params(Some(""), None, None)).unwrap();
        assert_eq!(filter.criteria(), ItemCriteria::NameFragment(""));
    }

    #[test]
    fn create_payload_requires_every_field() {
        let missing_merchant = CreateItem {
            name: Some("Fancy Item".into()),
            description: Some("It's a fancy item".into()),
            unit_price: Some(cents("1.50")),
            merchant_id: None,
        };
        assert!(matches!(missing_merchant.validate(), Err(AppError::Validation(_))));

        let ok = CreateItem {
            name: Some("Fancy Item".into()),
            description: Some("It's a fancy item".into()),
            unit_price: Some(cents("1.50")),
            merchant_id: Some(7),
        };
        assert_eq!(ok.validate().unwrap().merchant_id, 7);
    }

    #[test]
    fn update_payload_checks_only_supplied_fields() {
        assert!(UpdateItem::default().validate().is_ok());
        let bad_price = UpdateItem { unit_price: Some(cents("-2")), ..Default::default() };
        assert!(matches!(bad_price.validate(), Err(AppError::Validation(_))));
        let blank = UpdateItem { name: Some("   ".into()), ..Default::default() };
        assert!(matches!(blank.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn prices_are_kept_to_the_cent() {
        let create = CreateItem {
            name: Some("Fancy Item".into()),
            description: Some("It's a fancy item".into()),
            unit_price: Some(cents("1.005")),
            merchant_id: Some(7),
        };
        assert_eq!(create.validate().unwrap().unit_price, cents("1.00"));

        let patch = UpdateItem { unit_price: Some(cents("0.129")), ..Default::default() };
        assert_eq!(patch.validate().unwrap().unit_price, Some(cents("0.13")));

        let huge = UpdateItem { unit_price: Some(cents("100000000")), ..Default::default() };
        assert!(matches!(huge.validate(), Err(AppError::Validation(_))));
    }
}
