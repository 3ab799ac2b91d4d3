//! # Storage Layer
//!
//! The [`ProductStore`] trait abstracts persistence of the product records
//! so the layers above never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON array in
//!   `data/database.json`. Every operation reads the whole file and every
//!   mutation writes it back in full; there is no in-memory cache between
//!   operations.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! Identifiers are assigned by the store: highest existing id plus one, or 1
//! for an empty store. Gaps left by deletions are never refilled.

use crate::error::Result;
use crate::model::{NewProduct, Product, ProductPatch};

pub mod fs;
pub mod memory;

/// Abstract interface for product persistence.
pub trait ProductStore {
    /// All records, in insertion order. A missing or unreadable backing
    /// file is an empty store, not an error.
    fn load_all(&self) -> Result<Vec<Product>>;

    /// Append a record with a freshly assigned id and return it.
    fn create(&mut self, fields: NewProduct) -> Result<Product>;

    /// Linear scan by id.
    fn find_by_id(&self, id: u64) -> Result<Product>;

    /// Merge the present patch fields over the record and persist it.
    fn update(&mut self, id: u64, patch: &ProductPatch) -> Result<Product>;

    /// Remove a record. Returns whether anything was removed.
    fn delete(&mut self, id: u64) -> Result<bool>;
}

/// Id for the next record: max existing id + 1, or 1 when empty.
pub fn next_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Produto {}", id),
            category: "Geral".to_string(),
            quantity: 1,
            price: 1.0,
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_grows_past_the_max_without_filling_gaps() {
        assert_eq!(next_id(&[product(1), product(3)]), 4);
    }
}
