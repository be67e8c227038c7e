//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    commerce::models::{
        Address, CustomFields, CustomFieldsDraft, LocalizedString, Money, ProductId,
        ProductVariant,
    },
    uuids::TypedUuid,
};

/// Cart Id
pub type CartId = TypedUuid<Cart>;

/// Line Item Id
pub type LineItemId = TypedUuid<LineItem>;

/// Cart Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub version: u64,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_state: Option<CartState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<Timestamp>,
}

impl Cart {
    /// Variant of the first line item.
    #[must_use]
    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        self.line_items.first()?.variant.as_ref()
    }

    /// Read a custom field as text.
    #[must_use]
    pub fn custom_field_as_string(&self, name: &str) -> Option<String> {
        self.custom.as_ref()?.field_as_string(name)
    }
}

/// Cart lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartState {
    Active,
    Merged,
    Ordered,
    Frozen,
}

/// Cart Line Item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,

    pub quantity: u64,
}

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDraft {
    /// ISO 4217 currency code.
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFieldsDraft>,
}

impl CartDraft {
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            custom: None,
        }
    }

    #[must_use]
    pub fn with_custom(mut self, custom: CustomFieldsDraft) -> Self {
        self.custom = Some(custom);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_platform_cart() -> TestResult {
        let cart: Cart = serde_json::from_value(json!({
            "id": "0192f7d0-3c56-7bd1-8000-000000000001",
            "version": 7,
            "cartState": "Active",
            "createdAt": "2026-02-21T12:00:00.000Z",
            "lastModifiedAt": "2026-02-21T12:05:00.000Z",
            "totalPrice": { "currencyCode": "EUR", "centAmount": 1290 },
            "custom": { "type": { "typeId": "type", "id": "t1" }, "fields": { "frequency": "2" } },
            "lineItems": [{
                "id": "0192f7d0-3c56-7bd1-8000-000000000002",
                "productId": "0192f7d0-3c56-7bd1-8000-000000000003",
                "name": { "en": "Coffee" },
                "variant": { "id": 2, "sku": "coffee-2" },
                "quantity": 2
            }]
        }))?;

        assert_eq!(cart.version, 7);
        assert_eq!(cart.cart_state, Some(CartState::Active));
        assert_eq!(cart.custom_field_as_string("frequency").as_deref(), Some("2"));
        assert_eq!(cart.selected_variant().map(|variant| variant.id), Some(2));

        Ok(())
    }

    #[test]
    fn empty_cart_has_no_selected_variant() -> TestResult {
        let cart: Cart = serde_json::from_value(json!({
            "id": "0192f7d0-3c56-7bd1-8000-000000000001",
            "version": 1
        }))?;

        assert!(cart.selected_variant().is_none());
        assert!(cart.custom_field_as_string("frequency").is_none());

        Ok(())
    }

    #[test]
    fn draft_omits_absent_custom_fields() -> TestResult {
        assert_eq!(
            serde_json::to_value(CartDraft::new("EUR"))?,
            json!({ "currency": "EUR" })
        );

        Ok(())
    }
}
