//! Subscription frequency stored on carts.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value;

use crate::commerce::models::Cart;

/// Key of the custom type carrying the frequency field.
pub const FREQUENCY_TYPE_KEY: &str = "cart-frequency-key";

/// Name of the cart custom field holding the frequency.
pub const FREQUENCY_FIELD: &str = "frequency";

/// Container of the custom objects holding a cart's chosen frequency.
pub const FREQUENCY_CONTAINER: &str = "frequency";

/// Deliveries per plan period. Zero means no plan was chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Read a frequency from a loosely typed JSON value.
    ///
    /// Integers and numeric strings are accepted; anything else reads as
    /// [`Frequency::NONE`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let parsed = match value {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        };

        parsed.map_or(Self::NONE, Self)
    }

    /// Value written to the cart custom field.
    #[must_use]
    pub fn as_field_value(self) -> String {
        self.0.to_string()
    }

    /// Line item quantity for this frequency.
    #[must_use]
    pub fn quantity(self) -> u64 {
        u64::from(self.0)
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Frequency recorded on the cart's custom field.
#[must_use]
pub fn cart_frequency(cart: &Cart) -> Option<Frequency> {
    cart.custom
        .as_ref()?
        .fields
        .get(FREQUENCY_FIELD)
        .map(Frequency::from_value)
}

/// Raw frequency field for log output, `"null"` when unset.
pub(crate) fn frequency_label(cart: &Cart) -> String {
    cart.custom_field_as_string(FREQUENCY_FIELD)
        .unwrap_or_else(|| "null".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_numbers_and_numeric_strings() {
        assert_eq!(Frequency::from_value(&json!(2)), Frequency::new(2));
        assert_eq!(Frequency::from_value(&json!("4")), Frequency::new(4));
        assert_eq!(Frequency::from_value(&json!(" 1 ")), Frequency::new(1));
    }

    #[test]
    fn unreadable_values_are_none() {
        assert_eq!(Frequency::from_value(&json!("weekly")), Frequency::NONE);
        assert_eq!(Frequency::from_value(&json!(-1)), Frequency::NONE);
        assert_eq!(Frequency::from_value(&json!(1.5)), Frequency::NONE);
        assert_eq!(Frequency::from_value(&json!(null)), Frequency::NONE);
        assert_eq!(Frequency::from_value(&json!({ "value": 2 })), Frequency::NONE);
    }

    #[test]
    fn field_value_is_decimal_text() {
        assert_eq!(Frequency::new(2).as_field_value(), "2");
        assert_eq!(Frequency::NONE.as_field_value(), "0");
        assert!(Frequency::NONE.is_none());
        assert_eq!(Frequency::new(4).quantity(), 4);
    }
}
