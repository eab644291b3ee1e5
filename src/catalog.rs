//! Catalog Cache
//!
//! Read-only snapshot of the product and customer lists last fetched from the
//! backend. Lookups never touch the network; a refresh swaps in a complete new
//! snapshot.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{
    customers::{Customer, CustomerId},
    products::{Product, ProductId},
    selection::{CustomerMatches, filter_customers},
};

/// Immutable product and customer lists with lookup indexes.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    customers: Vec<Customer>,
    by_id: FxHashMap<ProductId, usize>,
    by_barcode: FxHashMap<String, usize>,
    customers_by_id: FxHashMap<CustomerId, usize>,
}

impl CatalogSnapshot {
    /// Build a snapshot and its indexes.
    ///
    /// Barcodes are expected to be unique; when two products share one the
    /// first product keeps it. Products with an empty barcode cannot be
    /// scanned.
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_barcode = FxHashMap::default();

        for (idx, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(idx);

            if !product.barcode.is_empty() {
                by_barcode.entry(product.barcode.clone()).or_insert(idx);
            }
        }

        let customers_by_id = customers
            .iter()
            .enumerate()
            .map(|(idx, customer)| (customer.id.clone(), idx))
            .collect();

        Self {
            products,
            customers,
            by_id,
            by_barcode,
            customers_by_id,
        }
    }

    /// Find a product by id.
    pub fn lookup_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&idx| self.products.get(idx))
    }

    /// Find a product by its scanned barcode.
    pub fn lookup_by_barcode(&self, code: &str) -> Option<&Product> {
        self.by_barcode
            .get(code)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Find a customer by id.
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers_by_id
            .get(id)
            .and_then(|&idx| self.customers.get(idx))
    }

    /// Customers whose name contains `search`, ignoring case.
    pub fn customers_matching<'a>(&'a self, search: &str) -> CustomerMatches<'a> {
        filter_customers(&self.customers, search)
    }

    /// All products in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All customers in fetch order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

/// Holder of the current [`CatalogSnapshot`].
#[derive(Debug, Default)]
pub struct CatalogCache {
    snapshot: Arc<CatalogSnapshot>,
    stale: bool,
}

impl CatalogCache {
    /// Create a cache seeded with `snapshot`.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            stale: false,
        }
    }

    /// Current snapshot.
    ///
    /// The returned handle stays valid after a later [`replace`](Self::replace).
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Borrow the current snapshot.
    pub fn current(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Swap in a freshly fetched snapshot and clear the stale flag.
    pub fn replace(&mut self, snapshot: CatalogSnapshot) {
        self.snapshot = Arc::new(snapshot);
        self.stale = false;
    }

    /// Mark order-derived views (stock counts, customer totals) as out of date.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether a refetch is due.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Find a product by id in the current snapshot.
    pub fn lookup_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.snapshot.lookup_by_id(id)
    }

    /// Find a product by barcode in the current snapshot.
    pub fn lookup_by_barcode(&self, code: &str) -> Option<&Product> {
        self.snapshot.lookup_by_barcode(code)
    }
}
