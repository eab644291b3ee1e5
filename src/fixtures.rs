//! Fixtures
//!
//! Catalog snapshots described in YAML, for tests and demos.

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::CatalogSnapshot,
    customers::{Customer, CustomerId},
    products::{Product, ProductId},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),
}

/// Catalog fixture file
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    products: Vec<ProductFixture>,

    #[serde(default)]
    customers: Vec<CustomerFixture>,
}

#[derive(Debug, Deserialize)]
struct ProductFixture {
    id: String,
    name: String,
    price: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    stock: u32,
    #[serde(default)]
    barcode: String,
}

#[derive(Debug, Deserialize)]
struct CustomerFixture {
    id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    loyalty_points: u64,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(fixture.price.trim())
            .map_err(|_err| FixtureError::InvalidPrice(fixture.price.clone()))?;

        if price < Decimal::ZERO {
            return Err(FixtureError::InvalidPrice(fixture.price));
        }

        Ok(Product {
            id: ProductId::new(fixture.id),
            name: fixture.name,
            price,
            category: fixture.category,
            stock: fixture.stock,
            barcode: fixture.barcode,
        })
    }
}

impl From<CustomerFixture> for Customer {
    fn from(fixture: CustomerFixture) -> Self {
        Customer {
            id: CustomerId::new(fixture.id),
            name: fixture.name,
            email: fixture.email,
            phone: fixture.phone,
            total_orders: 0,
            loyalty_points: fixture.loyalty_points,
        }
    }
}

/// Parse a catalog snapshot from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a price is not a non-negative decimal.
pub fn catalog_from_str(yaml: &str) -> Result<CatalogSnapshot, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let customers = fixture.customers.into_iter().map(Customer::from).collect();

    Ok(CatalogSnapshot::new(products, customers))
}

/// Load a catalog snapshot from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogSnapshot, FixtureError> {
    catalog_from_str(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    const YAML: &str = r#"
products:
  - id: cola
    name: Cola
    price: "1.99"
    stock: 3
    barcode: "0001"
customers:
  - id: c1
    name: Ada Lovelace
"#;

    #[test]
    fn parses_products_and_customers() -> TestResult {
        let catalog = catalog_from_str(YAML)?;

        let cola = catalog.lookup_by_barcode("0001");

        assert_eq!(cola.map(|p| p.price), Some(Decimal::new(199, 2)));
        assert!(catalog.customer(&CustomerId::new("c1")).is_some());

        Ok(())
    }

    #[test]
    fn rejects_bad_price() {
        let yaml = "products:\n  - id: x\n    name: X\n    price: \"abc\"\n";

        assert!(matches!(
            catalog_from_str(yaml),
            Err(FixtureError::InvalidPrice(price)) if price == "abc"
        ));
    }

    #[test]
    fn rejects_negative_price() {
        let yaml = "products:\n  - id: x\n    name: X\n    price: \"-1\"\n";

        assert!(matches!(catalog_from_str(yaml), Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(YAML.as_bytes())?;

        let catalog = load_catalog(file.path())?;

        assert_eq!(catalog.products().len(), 1);

        Ok(())
    }
}
