//! Cart update actions.

use serde::Serialize;
use serde_json::Value;

use crate::commerce::models::{Address, LineItem, LineItemId, ProductId};

/// A single change applied by a cart update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartUpdateAction {
    AddLineItem {
        product_id: ProductId,
        variant_id: u64,
        quantity: u64,
    },
    RemoveLineItem {
        line_item_id: LineItemId,

        /// Removes the whole line item when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<u64>,
    },
    SetCustomField {
        name: String,

        /// Clears the field when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },
    SetShippingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
}

impl CartUpdateAction {
    #[must_use]
    pub fn add_line_item(product_id: ProductId, variant_id: u64, quantity: u64) -> Self {
        Self::AddLineItem {
            product_id,
            variant_id,
            quantity,
        }
    }

    #[must_use]
    pub fn remove_line_item(item: &LineItem) -> Self {
        Self::RemoveLineItem {
            line_item_id: item.id,
            quantity: None,
        }
    }

    #[must_use]
    pub fn set_custom_field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::SetCustomField {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn set_shipping_address(address: Address) -> Self {
        Self::SetShippingAddress {
            address: Some(address),
        }
    }
}

/// Body of a cart update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CartUpdate<'a> {
    pub(crate) version: u64,
    pub(crate) actions: &'a [CartUpdateAction],
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn actions_use_platform_field_names() -> TestResult {
        let product = ProductId::from_uuid(Uuid::nil());
        let line_item = LineItemId::from_uuid(Uuid::nil());

        let actions = [
            CartUpdateAction::set_custom_field("frequency", "2"),
            CartUpdateAction::add_line_item(product, 3, 2),
            CartUpdateAction::RemoveLineItem {
                line_item_id: line_item,
                quantity: None,
            },
        ];

        let body = serde_json::to_value(CartUpdate {
            version: 5,
            actions: &actions,
        })?;

        assert_eq!(
            body,
            json!({
                "version": 5,
                "actions": [
                    { "action": "setCustomField", "name": "frequency", "value": "2" },
                    { "action": "addLineItem", "productId": Uuid::nil(), "variantId": 3, "quantity": 2 },
                    { "action": "removeLineItem", "lineItemId": Uuid::nil() },
                ]
            })
        );

        Ok(())
    }

    #[test]
    fn shipping_address_action_nests_address() -> TestResult {
        let action = CartUpdateAction::set_shipping_address(Address {
            city: Some("Berlin".to_string()),
            country: "DE".to_string(),
            ..Address::default()
        });

        assert_eq!(
            serde_json::to_value(action)?,
            json!({ "action": "setShippingAddress", "address": { "city": "Berlin", "country": "DE" } })
        );

        Ok(())
    }
}
