//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Stock level at or below which a product is reported as running low.
pub const LOW_STOCK_LEVEL: u32 = 10;

/// Product as served by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// Scannable barcode, empty when the product has none
    #[serde(default)]
    pub barcode: String,
}

impl Product {
    /// Whether the product's stock is at or below [`LOW_STOCK_LEVEL`].
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_LEVEL
    }
}

/// Product fields sent when creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Units in stock
    pub stock: u32,

    /// Scannable barcode
    pub barcode: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_numeric_price() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id":"p1","name":"Cola","price":1.99,"category":"drinks","stock":4,"barcode":"0001"}"#,
        )?;

        assert_eq!(product.id, ProductId::new("p1"));
        assert_eq!(product.price, Decimal::new(199, 2));
        assert_eq!(product.barcode, "0001");

        Ok(())
    }

    #[test]
    fn missing_barcode_defaults_to_empty() -> TestResult {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Cola","price":2,"category":"drinks"}"#)?;

        assert!(product.barcode.is_empty());
        assert_eq!(product.stock, 0);
        assert!(product.is_low_stock());

        Ok(())
    }
}
