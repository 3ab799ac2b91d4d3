use super::{next_id, ProductStore};
use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product, ProductPatch};
use std::fs;
use std::path::PathBuf;

const DATABASE_FILENAME: &str = "database.json";

/// File-backed store: the full record set lives in a single JSON array and
/// every mutation is a whole-file read-modify-write. A crash mid-write can
/// leave a truncated file behind; at this scale that is an accepted
/// limitation (the next load falls back to an empty store).
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory and seed an empty database file when
    /// absent. Called best-effort at startup.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.database_path();
        if !path.exists() {
            fs::write(path, "[]")?;
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILENAME)
    }

    fn load(&self) -> Vec<Product> {
        // Missing, unreadable and malformed all read as an empty store.
        fs::read_to_string(self.database_path())
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        let content = serde_json::to_string_pretty(products)?;
        fs::write(self.database_path(), content)?;
        Ok(())
    }
}

impl ProductStore for FileStore {
    fn load_all(&self) -> Result<Vec<Product>> {
        Ok(self.load())
    }

    fn create(&mut self, fields: NewProduct) -> Result<Product> {
        let mut products = self.load();
        let product = Product {
            id: next_id(&products),
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
        };
        products.push(product.clone());
        self.save(&products)?;
        Ok(product)
    }

    fn find_by_id(&self, id: u64) -> Result<Product> {
        self.load()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))
    }

    fn update(&mut self, id: u64, patch: &ProductPatch) -> Result<Product> {
        let mut products = self.load();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        patch.apply(product);
        let updated = product.clone();
        self.save(&products)?;
        Ok(updated)
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let products = self.load();
        let remaining: Vec<Product> = products.iter().filter(|p| p.id != id).cloned().collect();
        // Only rewrite when something was actually removed.
        if remaining.len() == products.len() {
            return Ok(false);
        }
        self.save(&remaining)?;
        Ok(true)
    }
}
