//! # Domain Service
//!
//! Thin facade over the store: the session talks to [`ProductService`],
//! never to a store directly. Generic over [`ProductStore`] so the whole
//! service can be exercised against [`crate::store::memory::InMemoryStore`]
//! in tests.

use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product, ProductPatch};
use crate::store::ProductStore;
use std::collections::BTreeSet;

pub struct ProductService<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_product(&mut self, fields: NewProduct) -> Result<Product> {
        self.store.create(fields)
    }

    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.store.load_all()
    }

    /// Fails with `NotFound` before touching the store when the id does not
    /// exist.
    pub fn update_product(&mut self, id: u64, patch: &ProductPatch) -> Result<Product> {
        self.store.find_by_id(id)?;
        self.store.update(id, patch)
    }

    pub fn delete_product(&mut self, id: u64) -> Result<()> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(InventoryError::NotFoundOnDelete(id))
        }
    }

    /// A query that parses fully as a number searches by exact id (0 or 1
    /// result; fractional numbers match nothing). Anything else is a
    /// case-insensitive substring match on the name, in store order.
    pub fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let query = query.trim();
        if query.parse::<f64>().is_ok() {
            let results = match query.parse::<u64>() {
                Ok(id) => match self.store.find_by_id(id) {
                    Ok(product) => vec![product],
                    Err(InventoryError::NotFound(_)) => Vec::new(),
                    Err(e) => return Err(e),
                },
                Err(_) => Vec::new(),
            };
            return Ok(results);
        }

        let needle = query.to_lowercase();
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Sorted distinct categories across all records. Feeds the category
    /// picker in the add flow.
    pub fn categories(&self) -> Result<Vec<String>> {
        let categories: BTreeSet<String> = self
            .store
            .load_all()?
            .into_iter()
            .map(|p| p.category)
            .collect();
        Ok(categories.into_iter().collect())
    }
}
