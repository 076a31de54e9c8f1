//! Store errors, wrapping serde_json and IO errors.

use std::path::PathBuf;
use thiserror::Error;

/// Account store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The ledger file does not exist yet. An expected condition on
    /// first run; the caller starts with an empty ledger.
    #[error("No se encontró el archivo de cuentas: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("Error de E/S en el archivo de cuentas: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error al decodificar las cuentas: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// True for the expected missing-file case on load.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, StoreError::FileMissing(_))
    }
}
