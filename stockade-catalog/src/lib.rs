pub mod discount;
pub mod factory;
pub mod inventory;
pub mod product;

pub use discount::{DiscountKind, DiscountResult, UnknownDiscountKind};
pub use inventory::{InventoryError, InventoryManager, SaleReceipt};
pub use product::{Category, Product, ProductError};
