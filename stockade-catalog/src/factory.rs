//! Validated product construction.
//!
//! Every product enters the catalog through here so category minimum
//! prices are enforced in one place.

use stockade_core::money::Cents;
use stockade_core::BusinessRules;

use crate::product::{Category, Product, ProductError};

/// Create a product under the default business rules.
pub fn create(
    id: &str,
    name: &str,
    category: Category,
    price_cents: Cents,
    quantity: u32,
) -> Result<Product, ProductError> {
    create_with_rules(id, name, category, price_cents, quantity, &BusinessRules::default())
}

/// Create a product, enforcing the configured minimum price for its
/// category. The boundary is inclusive: exactly the minimum is accepted.
pub fn create_with_rules(
    id: &str,
    name: &str,
    category: Category,
    price_cents: Cents,
    quantity: u32,
    rules: &BusinessRules,
) -> Result<Product, ProductError> {
    if price_cents < 0 {
        return Err(ProductError::NegativePrice(price_cents));
    }

    let min_cents = match category {
        Category::Book => rules.book_min_price_cents,
        Category::Electronics => rules.electronics_min_price_cents,
    };
    if price_cents < min_cents {
        return Err(ProductError::PriceBelowMinimum {
            category,
            price_cents,
            min_cents,
        });
    }

    Product::new(id, name, category, price_cents, quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_valid_book() {
        let book = create("B001", "Test Book", Category::Book, 2_000, 5).unwrap();
        assert_eq!(book.id, "B001");
        assert_eq!(book.name, "Test Book");
        assert_eq!(book.category, Category::Book);
        assert_eq!(book.price_cents, 2_000);
        assert_eq!(book.quantity, 5);
    }

    #[test]
    fn creates_valid_electronics() {
        let laptop = create("E001", "Test Laptop", Category::Electronics, 50_000, 3).unwrap();
        assert_eq!(laptop.category, Category::Electronics);
        assert_eq!(laptop.quantity, 3);
    }

    #[test]
    fn book_minimum_price_is_inclusive() {
        // exactly $5.00 is accepted
        assert!(create("B002", "Cheapest Book", Category::Book, 500, 1).is_ok());
    }

    #[test]
    fn electronics_minimum_price_is_inclusive() {
        // exactly $10.00 is accepted
        assert!(create("E002", "Cheapest Gadget", Category::Electronics, 1_000, 1).is_ok());
    }

    #[test]
    fn book_below_minimum_is_rejected() {
        let err = create("B003", "Cheap Book", Category::Book, 200, 1).unwrap_err();
        assert!(matches!(
            err,
            ProductError::PriceBelowMinimum {
                category: Category::Book,
                price_cents: 200,
                min_cents: 500,
            }
        ));
    }

    #[test]
    fn electronics_below_minimum_is_rejected() {
        let err = create("E003", "Cheap Gadget", Category::Electronics, 999, 1).unwrap_err();
        assert!(matches!(
            err,
            ProductError::PriceBelowMinimum {
                category: Category::Electronics,
                min_cents: 1_000,
                ..
            }
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = create("B004", "Bad Book", Category::Book, -100, 1).unwrap_err();
        assert!(matches!(err, ProductError::NegativePrice(-100)));
    }

    #[test]
    fn configured_minimums_are_honored() {
        let rules = BusinessRules {
            book_min_price_cents: 100,
            ..BusinessRules::default()
        };
        assert!(create_with_rules("B005", "Pamphlet", Category::Book, 100, 1, &rules).is_ok());
        assert!(create_with_rules("B006", "Flyer", Category::Book, 99, 1, &rules).is_err());
    }
}
