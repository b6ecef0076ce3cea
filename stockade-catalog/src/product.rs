use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stockade_core::money::{self, Cents};

/// Product classifications in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Book,
    Electronics,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Book => write!(f, "Book"),
            Category::Electronics => write!(f, "Electronics"),
        }
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("book") {
            Ok(Category::Book)
        } else if s.eq_ignore_ascii_case("electronics") {
            Ok(Category::Electronics)
        } else {
            Err(ProductError::UnsupportedCategory(s.to_string()))
        }
    }
}

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("Price cannot be negative: {0}")]
    NegativePrice(Cents),

    #[error("{category} price {price_cents}c is below the minimum of {min_cents}c")]
    PriceBelowMinimum {
        category: Category,
        price_cents: Cents,
        min_cents: Cents,
    },
}

/// Core product entity. Quantity is unsigned so stock can never observe a
/// negative value; price is validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price_cents: Cents,
    pub quantity: u32,
}

impl Product {
    pub fn new(
        id: &str,
        name: &str,
        category: Category,
        price_cents: Cents,
        quantity: u32,
    ) -> Result<Self, ProductError> {
        if price_cents < 0 {
            return Err(ProductError::NegativePrice(price_cents));
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            price_cents,
            quantity,
        })
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Deduct sold units. Returns false and leaves stock untouched for a
    /// zero amount or an overdraw.
    pub fn sell(&mut self, amount: u32) -> bool {
        if amount == 0 || amount > self.quantity {
            return false;
        }
        self.quantity -= amount;
        true
    }

    pub fn add_stock(&mut self, amount: u32) {
        self.quantity += amount;
    }

    /// Value of the units currently on hand.
    pub fn line_value_cents(&self) -> Cents {
        money::line_total(self.price_cents, self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}) {} x{}",
            self.name,
            self.id,
            self.category,
            money::format_cents(self.price_cents),
            self.quantity
        )
    }
}
