//! Customer listing.
//!
//! Each account renders as `"<firstName> - <iban> - <balance>"`, in
//! insertion order; the final line carries the total account count.
//! Balances print as raw decimals here, not in the grouped currency
//! format the console uses.

use std::fs;
use std::io;
use std::path::Path;

use banco_core::Account;

/// Flat customer listing built from the ledger's accounts.
#[derive(Debug, Clone)]
pub struct CustomerListing {
    lines: Vec<String>,
}

impl CustomerListing {
    /// Builds the listing, preserving account order.
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let lines = accounts
            .iter()
            .map(|cuenta| {
                format!(
                    "{} - {} - {}",
                    cuenta.holder.name, cuenta.iban, cuenta.balance
                )
            })
            .collect();
        Self { lines }
    }

    /// Number of accounts in the listing.
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// Renders the listing. The trailing total line carries no final
    /// newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("Número total de cuentas: {}", self.total()));
        out
    }

    /// Writes the listing, overwriting any existing file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.render())
    }
}
