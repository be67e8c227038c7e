//! Pactas Models

use serde::{Deserialize, Serialize};

use crate::commerce::models::Address;

pub use crate::oauth::Authorization;

/// Subscription contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PactasContract {
    pub id: String,

    /// Plan variant the customer subscribed to.
    pub plan_variant_id: String,

    pub customer_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Customer owning a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PactasCustomer {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PactasAddress>,
}

impl PactasCustomer {
    /// Customer name, contact and postal address as a commerce address.
    ///
    /// Returns `None` when the customer has no address with a country.
    #[must_use]
    pub fn complete_address(&self) -> Option<Address> {
        let address = self.address.as_ref()?;

        Some(Address {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company_name.clone(),
            street_name: address.street.clone(),
            street_number: address.house_number.clone(),
            postal_code: address.postal_code.clone(),
            city: address.city.clone(),
            country: address.country.clone()?,
            email: self.email_address.clone(),
        })
    }
}

/// Postal address as Pactas stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PactasAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
