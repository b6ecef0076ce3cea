use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockade_core::money::{self, Cents};
use stockade_core::BusinessRules;

use crate::discount::{self, DiscountKind};
use crate::factory;
use crate::product::{Category, Product, ProductError};

/// Structured outcome of a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleReceipt {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_cents: Cents,
    pub original_total_cents: Cents,
    pub discount_cents: Cents,
    pub discount_description: String,
    pub final_total_cents: Cents,
    pub remaining_stock: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error(transparent)]
    Product(#[from] ProductError),
}

/// In-memory inventory manager. Owns the product collection exclusively;
/// every mutation goes through these operations, and every failure leaves
/// the collection exactly as it was.
pub struct InventoryManager {
    products: HashMap<String, Product>,
    rules: BusinessRules,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::with_rules(BusinessRules::default())
    }

    pub fn with_rules(rules: BusinessRules) -> Self {
        Self {
            products: HashMap::new(),
            rules,
        }
    }

    /// Create a product through the factory and add it to the catalog.
    /// An entry with the same id is overwritten.
    pub fn add_product(
        &mut self,
        id: &str,
        name: &str,
        category: Category,
        price_cents: Cents,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        let product =
            factory::create_with_rules(id, name, category, price_cents, quantity, &self.rules)
                .map_err(|e| {
                    tracing::warn!(id, error = %e, "product rejected");
                    e
                })?;

        tracing::info!(id, name, category = ?category, "product added");
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Sell `quantity` units, applying the selected discount. Stock is only
    /// deducted once the product is found and has enough on hand.
    pub fn sell(
        &mut self,
        id: &str,
        quantity: u32,
        kind: DiscountKind,
    ) -> Result<SaleReceipt, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;

        let result = discount::calculate(product, quantity, kind);
        let original_total = money::line_total(product.price_cents, quantity);

        if !product.sell(quantity) {
            tracing::warn!(
                id,
                requested = quantity,
                available = product.quantity,
                "sale rejected"
            );
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }

        let receipt = SaleReceipt {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price_cents: product.price_cents,
            original_total_cents: original_total,
            discount_cents: result.amount_cents,
            discount_description: result.description,
            final_total_cents: original_total - result.amount_cents,
            remaining_stock: product.quantity,
        };
        tracing::info!(
            id,
            quantity,
            total = %money::format_cents(receipt.final_total_cents),
            remaining = receipt.remaining_stock,
            "sale completed"
        );
        Ok(receipt)
    }

    /// Name-keyed convenience wrapper around [`sell`](Self::sell).
    pub fn sell_by_name(
        &mut self,
        name: &str,
        quantity: u32,
        kind: DiscountKind,
    ) -> Result<SaleReceipt, InventoryError> {
        let id = self
            .find_by_name(name)
            .map(|p| p.id.clone())
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        self.sell(&id, quantity, kind)
    }

    /// Add stock to an existing product, returning the new level. A zero
    /// increment is rejected.
    pub fn add_stock(&mut self, id: &str, quantity: u32) -> Result<u32, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        product.add_stock(quantity);

        tracing::info!(id, added = quantity, stock = product.quantity, "stock added");
        Ok(product.quantity)
    }

    /// Name-keyed convenience wrapper around [`add_stock`](Self::add_stock).
    pub fn add_stock_by_name(&mut self, name: &str, quantity: u32) -> Result<u32, InventoryError> {
        let id = self
            .find_by_name(name)
            .map(|p| p.id.clone())
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        self.add_stock(&id, quantity)
    }

    /// Case-insensitive exact-name lookup; first match wins. O(n) scan,
    /// there is no secondary index.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Products at or below the threshold. `None` means the configured
    /// default.
    pub fn list_low_stock(&self, threshold: Option<u32>) -> Vec<&Product> {
        let threshold = threshold.unwrap_or(self.rules.low_stock_threshold);
        self.products
            .values()
            .filter(|p| p.quantity <= threshold)
            .collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Total value of the catalog: Σ price × quantity.
    pub fn total_value_cents(&self) -> Cents {
        self.products.values().map(Product::line_value_cents).sum()
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}
