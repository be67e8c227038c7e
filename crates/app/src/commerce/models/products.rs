//! Product Models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{commerce::models::LocalizedString, uuids::TypedUuid};

/// Product Id
pub type ProductId = TypedUuid<ProductProjection>;

/// Published view of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    pub id: ProductId,
    pub version: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,

    pub master_variant: ProductVariant,

    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl ProductProjection {
    /// The master variant followed by the remaining variants.
    pub fn all_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        std::iter::once(&self.master_variant).chain(self.variants.iter())
    }
}

/// Product Variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ProductVariant {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }
}

/// Named product attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

impl Attribute {
    /// The value when it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Identifies a variant by product id and variant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantIdentifier {
    pub product_id: ProductId,
    pub variant_id: u64,
}
