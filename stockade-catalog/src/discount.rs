//! Discount calculation.
//!
//! Discounts are selected by a closed [`DiscountKind`] tag and computed as
//! a pure function of the product, the quantity, and the tag. No state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use stockade_core::money::{self, Cents};

use crate::product::{Category, Product};

/// Student discount rate: 10%, books only.
pub const STUDENT_DISCOUNT_BPS: i64 = 1_000;
/// Bulk discount rate: 15% once the quantity reaches [`BULK_MIN_QUANTITY`].
pub const BULK_DISCOUNT_BPS: i64 = 1_500;
/// Minimum quantity for the bulk discount (inclusive).
pub const BULK_MIN_QUANTITY: u32 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Student,
    Bulk,
    None,
}

/// Raised when a discount-kind string does not name a known kind. Unknown
/// kinds are an error rather than a silent fall-through to `None`.
#[derive(Debug, thiserror::Error)]
#[error("Unknown discount kind: {0}")]
pub struct UnknownDiscountKind(pub String);

impl FromStr for DiscountKind {
    type Err = UnknownDiscountKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("student") {
            Ok(DiscountKind::Student)
        } else if s.eq_ignore_ascii_case("bulk") {
            Ok(DiscountKind::Bulk)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(DiscountKind::None)
        } else {
            Err(UnknownDiscountKind(s.to_string()))
        }
    }
}

/// Outcome of a discount calculation. Ephemeral, produced per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountResult {
    pub amount_cents: Cents,
    pub description: String,
}

impl DiscountResult {
    fn none() -> Self {
        Self {
            amount_cents: 0,
            description: "No discount applied".to_string(),
        }
    }
}

/// Compute the discount for selling `quantity` units of `product`.
pub fn calculate(product: &Product, quantity: u32, kind: DiscountKind) -> DiscountResult {
    let total = money::line_total(product.price_cents, quantity);

    match kind {
        DiscountKind::Student => {
            if product.category == Category::Book {
                DiscountResult {
                    amount_cents: money::percentage(total, STUDENT_DISCOUNT_BPS),
                    description: "Student discount: 10% off books".to_string(),
                }
            } else {
                DiscountResult {
                    amount_cents: 0,
                    description: "Student discount only applies to books".to_string(),
                }
            }
        }
        DiscountKind::Bulk => {
            if quantity >= BULK_MIN_QUANTITY {
                DiscountResult {
                    amount_cents: money::percentage(total, BULK_DISCOUNT_BPS),
                    description: "Bulk discount: 15% off for 5+ items".to_string(),
                }
            } else {
                DiscountResult {
                    amount_cents: 0,
                    description: "Bulk discount requires 5+ items".to_string(),
                }
            }
        }
        DiscountKind::None => DiscountResult::none(),
    }
}
