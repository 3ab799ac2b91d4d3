use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Produto não encontrado.")]
    NotFound(u64),

    #[error("Produto não encontrado para exclusão.")]
    NotFoundOnDelete(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
