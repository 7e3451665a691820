use serde::{Serialize, Deserialize};
use crate::types::error::AppError;
use crate::types::resource::Resource;

pub const MERCHANT_TYPE: &str = "merchant";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MerchantAttributes {
    pub name: String,
}

pub type MerchantResource = Resource<MerchantAttributes>;

impl From<entity::merchant::Model> for MerchantResource {
    fn from(merchant: entity::merchant::Model) -> Self {
        Resource::new(merchant.id, MERCHANT_TYPE, MerchantAttributes { name: merchant.name })
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateMerchant {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateMerchant {
    pub name: Option<String>,
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".into()));
    }
    Ok(())
}

impl CreateMerchant {
    pub fn validate(self) -> Result<String, AppError> {
        let name = self.name.ok_or_else(|| AppError::Validation("name is required".into()))?;
        check_name(&name)?;
        Ok(name)
    }
}

impl UpdateMerchant {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => check_name(name),
            None => Ok(()),
        }
    }
}

/// `/merchants/find_all` query. A missing or empty name matches every merchant.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct MerchantFilter {
    pub name: Option<String>,
}

impl MerchantFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    /// The substring to match, or `None` when every merchant matches.
    pub fn fragment(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
