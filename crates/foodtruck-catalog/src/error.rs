use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("store error: {0}")]
    Store(#[from] foodtruck_store::StoreError),

    #[error("operation cancelled")]
    Cancelled,

    #[error("seed error: {0}")]
    Seed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
