use super::{next_id, ProductStore};
use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product, ProductPatch};

/// In-memory store for tests. Same semantics as the file store, minus the
/// persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn create(&mut self, fields: NewProduct) -> Result<Product> {
        let product = Product {
            id: next_id(&self.products),
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
        };
        self.products.push(product.clone());
        Ok(product)
    }

    fn find_by_id(&self, id: u64) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    fn update(&mut self, id: u64, patch: &ProductPatch) -> Result<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        patch.apply(product);
        Ok(product.clone())
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        Ok(self.products.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: "Geral".to_string(),
            quantity: 1,
            price: 1.0,
        }
    }

    #[test]
    fn create_find_delete_round_trip() {
        let mut store = InMemoryStore::new();
        let created = store.create(fields("A")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.find_by_id(1).unwrap(), created);

        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert!(store.load_all().unwrap().is_empty());
    }
}
