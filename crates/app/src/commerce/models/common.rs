//! Shared commerce platform types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text keyed by locale, e.g. `{"en": "Coffee"}`.
pub type LocalizedString = FxHashMap<String, String>;

/// Amount of money in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    pub cent_amount: i64,
}

/// Reference to, or identifier of, another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub type_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ResourceIdentifier {
    /// Identify a custom type by its key.
    #[must_use]
    pub fn type_by_key(key: impl Into<String>) -> Self {
        Self {
            type_id: "type".to_string(),
            id: None,
            key: Some(key.into()),
        }
    }
}

/// Custom fields attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFields {
    #[serde(rename = "type")]
    pub type_ref: ResourceIdentifier,

    #[serde(default)]
    pub fields: FxHashMap<String, Value>,
}

impl CustomFields {
    /// Read a field as text. Numbers and booleans are rendered as text.
    #[must_use]
    pub fn field_as_string(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

/// Custom fields sent when creating a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldsDraft {
    #[serde(rename = "type")]
    pub type_ref: ResourceIdentifier,

    #[serde(default)]
    pub fields: FxHashMap<String, Value>,
}

impl CustomFieldsDraft {
    #[must_use]
    pub fn of_type_key_and_fields(
        type_key: impl Into<String>,
        fields: FxHashMap<String, Value>,
    ) -> Self {
        Self {
            type_ref: ResourceIdentifier::type_by_key(type_key),
            fields,
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two letter ISO country code.
    pub country: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A JSON document stored under a container and key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomObject {
    pub id: String,
    pub version: u64,
    pub container: String,
    pub key: String,
    pub value: Value,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedQueryResult<T> {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    pub results: Vec<T>,
}

impl<T> PagedQueryResult<T> {
    /// First result of the page, if any.
    #[must_use]
    pub fn into_head(self) -> Option<T> {
        self.results.into_iter().next()
    }
}
