//! Cart

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::CatalogSnapshot,
    products::{Product, ProductId},
};

/// Errors raised by cart edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product is not in the current catalog snapshot.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// No product in the catalog carries this barcode.
    #[error("no product with barcode {0}")]
    UnknownBarcode(String),

    /// A quantity outside `0..=u32::MAX` was requested.
    #[error("invalid quantity {0}")]
    InvalidQuantity(i64),
}

/// A product and how many of it are being bought.
///
/// The line only names the product; price and name are looked up in the
/// catalog each time they are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    quantity: u32,
}

impl CartLine {
    /// Product this line refers to
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Units on this line, always at least one
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Sale in progress.
///
/// Lines keep the position of the first add; later quantity changes do not
/// reorder them. No two lines share a product.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `id`.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotFound`]: the product is not in `catalog`.
    /// - [`CartError::InvalidQuantity`]: the line would overflow.
    pub fn add_product(
        &mut self,
        catalog: &CatalogSnapshot,
        id: &ProductId,
    ) -> Result<(), CartError> {
        if catalog.lookup_by_id(id).is_none() {
            return Err(CartError::NotFound(id.clone()));
        }

        match self.line_mut(id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or(CartError::InvalidQuantity(i64::from(line.quantity) + 1))?;
            }
            None => self.lines.push(CartLine {
                product_id: id.clone(),
                quantity: 1,
            }),
        }

        Ok(())
    }

    /// Add one unit of the product scanned as `code`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownBarcode`] when no product carries the code;
    /// the cart is left unchanged.
    pub fn add_by_barcode(&mut self, catalog: &CatalogSnapshot, code: &str) -> Result<(), CartError> {
        let product = catalog
            .lookup_by_barcode(code)
            .ok_or_else(|| CartError::UnknownBarcode(code.to_string()))?;

        self.add_product(catalog, &product.id)
    }

    /// Set the quantity of an existing line.
    ///
    /// Zero removes the line. Products without a line are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for negative or oversized values.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove_line(id);

            return Ok(());
        }

        let quantity = u32::try_from(quantity).map_err(|_err| CartError::InvalidQuantity(quantity))?;

        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }

        Ok(())
    }

    /// Drop the line for `id`, if there is one.
    pub fn remove_line(&mut self, id: &ProductId) {
        self.lines.retain(|line| line.product_id != *id);
    }

    /// Sum of price times quantity, priced from `catalog` now.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if a line's product has left the catalog.
    pub fn total(&self, catalog: &CatalogSnapshot) -> Result<Decimal, CartError> {
        self.resolved(catalog)
            .try_fold(Decimal::ZERO, |acc, resolved| {
                let (line, product) = resolved?;

                Ok(acc + product.price * Decimal::from(line.quantity))
            })
    }

    /// Lines paired with their catalog product, in cart order.
    pub fn resolved<'a>(
        &'a self,
        catalog: &'a CatalogSnapshot,
    ) -> impl Iterator<Item = Result<(&'a CartLine, &'a Product), CartError>> + 'a {
        self.lines.iter().map(|line| {
            catalog
                .lookup_by_id(&line.product_id)
                .map(|product| (line, product))
                .ok_or_else(|| CartError::NotFound(line.product_id.clone()))
        })
    }

    /// Units of `id` in the cart, zero when there is no line.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product_id == *id)
            .map_or(0, CartLine::quantity)
    }

    /// Lines in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == *id)
    }
}
