//! Inventory Models

use serde::{Deserialize, Serialize};
use thiserror::Error;
use till::{ids::TypedId, products::ProductId};

/// Inventory Item Id
pub type InventoryItemId = TypedId<InventoryItem>;

/// Stock record for one product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub product_id: ProductId,

    #[serde(default)]
    pub product_name: String,

    pub quantity: u32,
    pub low_stock_threshold: u32,
}

impl InventoryItem {
    /// Whether stock has fallen to the item's threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// New Inventory Item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub low_stock_threshold: u32,
}

impl NewInventoryItem {
    /// Check the record before it is sent.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank product id or a zero threshold.
    pub fn validate(&self) -> Result<(), InventoryValidationError> {
        if self.product_id.as_str().trim().is_empty() {
            return Err(InventoryValidationError::MissingProduct);
        }

        if self.low_stock_threshold == 0 {
            return Err(InventoryValidationError::ZeroThreshold);
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryValidationError {
    #[error("product id is required")]
    MissingProduct,

    #[error("low stock threshold must be at least 1")]
    ZeroThreshold,
}

/// One page of the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPage {
    #[serde(rename = "inventory")]
    pub items: Vec<InventoryItem>,

    #[serde(default = "first_page")]
    pub total_pages: u32,
}

const fn first_page() -> u32 {
    1
}
