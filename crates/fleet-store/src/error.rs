use fleet_core::PackageId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("package {0} already present in store")]
    DuplicateKey(PackageId),

    #[error("package {0} not found")]
    NotFound(PackageId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
