//! Plan variant lookup.
//!
//! Each product variant carries the Pactas plan variant ids it is sold under,
//! one attribute per delivery rhythm.

use thiserror::Error;

use crate::commerce::models::{ProductProjection, ProductVariant};

/// Attribute holding the monthly plan variant id.
pub const PLAN_MONTHLY_ATTRIBUTE: &str = "pactas4";

/// Attribute holding the two-weekly plan variant id.
pub const PLAN_TWO_WEEKS_ATTRIBUTE: &str = "pactas2";

/// Attribute holding the weekly plan variant id.
pub const PLAN_WEEKLY_ATTRIBUTE: &str = "pactas1";

const PLAN_ATTRIBUTES: [&str; 3] = [
    PLAN_MONTHLY_ATTRIBUTE,
    PLAN_TWO_WEEKS_ATTRIBUTE,
    PLAN_WEEKLY_ATTRIBUTE,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanVariantError {
    #[error("no product variant found for plan variant {0}")]
    NotFound(String),

    #[error("unable to get attribute '{attribute}' of variant {variant_id}")]
    MissingAttribute {
        attribute: &'static str,
        variant_id: u64,
    },
}

/// Find the variant of `product` sold under `plan_variant_id`.
///
/// Variants are checked in order, master variant first. Every variant
/// checked must carry all plan attributes as text.
///
/// # Errors
///
/// Returns [`PlanVariantError::MissingAttribute`] when a checked variant lacks
/// a plan attribute and [`PlanVariantError::NotFound`] when no variant matches.
pub fn plan_variant<'a>(
    product: &'a ProductProjection,
    plan_variant_id: &str,
) -> Result<&'a ProductVariant, PlanVariantError> {
    for variant in product.all_variants() {
        if sold_under(variant, plan_variant_id)? {
            return Ok(variant);
        }
    }

    Err(PlanVariantError::NotFound(plan_variant_id.to_string()))
}

fn sold_under(variant: &ProductVariant, plan_variant_id: &str) -> Result<bool, PlanVariantError> {
    let mut matched = false;

    for attribute in PLAN_ATTRIBUTES {
        let plan = variant
            .attribute(attribute)
            .and_then(|value| value.as_str())
            .ok_or(PlanVariantError::MissingAttribute {
                attribute,
                variant_id: variant.id,
            })?;

        matched |= plan == plan_variant_id;
    }

    Ok(matched)
}
