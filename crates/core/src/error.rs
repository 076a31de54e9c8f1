//! Domain errors.
//!
//! The `Display` texts are the exact console messages the shell prints,
//! so business-rule rejections can be surfaced to the user unchanged.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // === Holder validation ===
    #[error("El campo '{field}' no puede estar vacío.")]
    EmptyField { field: &'static str },

    #[error("El DNI debe tener 8 números seguidos por una letra: {0}")]
    InvalidNationalId(String),

    // === Ledger rules ===
    /// Duplicate-IBAN rejection on open. The wording talks about an
    /// account limit, but no numeric cap exists; the check is an
    /// IBAN-collision guard only.
    #[error("No se pueden abrir más cuentas. Límite alcanzado.")]
    AccountLimitReached { iban: String },

    // === Account operations ===
    /// Generic deposit rejection (non-positive amount).
    #[error("Error en el ingreso. Verifique la cantidad ingresada.")]
    DepositRejected,

    /// Generic withdrawal rejection. Covers both non-positive amounts
    /// and amounts over the balance; the two cases are not
    /// distinguished.
    #[error("Error en el retiro de efectivo. Verifique la cantidad ingresada.")]
    WithdrawalRejected,
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True for the duplicate-IBAN open rejection.
    pub fn is_duplicate_iban(&self) -> bool {
        matches!(self, CoreError::AccountLimitReached { .. })
    }
}
