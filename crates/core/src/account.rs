//! Accounts: shared fields plus a per-variant payload.
//!
//! The three account kinds share holder, balance and IBAN; everything
//! variant-specific lives in [`AccountKind`]. Formatting dispatches by
//! matching on the kind, and the persisted encoding carries an explicit
//! `"type"` tag next to the variant fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::format_currency;
use crate::person::Person;

/// Variant-specific data of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Remunerated savings account.
    Savings {
        /// Interest rate, in percent
        interest_rate: Decimal,
    },
    /// Checking account for an individual.
    PersonalChecking {
        /// Free-text list of authorized entities
        authorized_entities: String,
        /// Maintenance fee, in euros
        maintenance_fee: Decimal,
    },
    /// Checking account for a business.
    BusinessChecking {
        /// Free-text list of authorized entities
        authorized_entities: String,
        /// Overdraft interest rate
        overdraft_rate: Decimal,
        /// Maximum overdraft allowed
        overdraft_limit: Decimal,
    },
}

impl AccountKind {
    /// Console label for the account type.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Cuenta de Ahorro",
            AccountKind::PersonalChecking { .. } => "Cuenta Corriente Personal",
            AccountKind::BusinessChecking { .. } => "Cuenta Corriente Empresa",
        }
    }
}

/// A bank account: holder, balance, IBAN and variant payload.
///
/// `balance` is not constrained to be non-negative here; only the
/// withdraw operation enforces sufficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Titular of the account
    pub holder: Person,
    /// Current balance, in euros
    pub balance: Decimal,
    /// Unique account code: "ES" + 10 digits
    pub iban: String,
    /// Variant payload, flattened next to the shared fields
    #[serde(flatten)]
    pub kind: AccountKind,
}

impl Account {
    /// Creates a savings account.
    pub fn savings(holder: Person, balance: Decimal, iban: String, interest_rate: Decimal) -> Self {
        Self {
            holder,
            balance,
            iban,
            kind: AccountKind::Savings { interest_rate },
        }
    }

    /// Creates a personal checking account.
    pub fn personal_checking(
        holder: Person,
        balance: Decimal,
        iban: String,
        authorized_entities: String,
        maintenance_fee: Decimal,
    ) -> Self {
        Self {
            holder,
            balance,
            iban,
            kind: AccountKind::PersonalChecking {
                authorized_entities,
                maintenance_fee,
            },
        }
    }

    /// Creates a business checking account.
    pub fn business_checking(
        holder: Person,
        balance: Decimal,
        iban: String,
        authorized_entities: String,
        overdraft_rate: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self {
            holder,
            balance,
            iban,
            kind: AccountKind::BusinessChecking {
                authorized_entities,
                overdraft_rate,
                overdraft_limit,
            },
        }
    }

    /// Generic one-account summary, the layout the listing view prints.
    pub fn summary(&self) -> String {
        format!(
            "Tipo de cuenta: {}\nTitular: {}\nIBAN: {}\nSaldo actual: {} €",
            self.kind.label(),
            self.holder.full_name(),
            self.iban,
            format_currency(self.balance),
        )
    }

    /// Variant-specific multi-line detail view.
    pub fn detail(&self) -> String {
        match &self.kind {
            AccountKind::Savings { interest_rate } => format!(
                "Cuenta de Ahorro:\n{}\nTasa de Interés: {:.2}%",
                self.holder_block(),
                interest_rate,
            ),
            AccountKind::PersonalChecking {
                authorized_entities,
                maintenance_fee,
            } => format!(
                "Cuenta Corriente Personal\n{}\nComisión de Mantenimiento: {} €",
                self.checking_block(authorized_entities),
                format_currency(*maintenance_fee),
            ),
            AccountKind::BusinessChecking {
                authorized_entities,
                overdraft_rate,
                overdraft_limit,
            } => format!(
                "Cuenta Corriente Empresa\n{}\nTasa de Interés Descubierto: {:.2}\nMáximo Descubierto: {}",
                self.checking_block(authorized_entities),
                overdraft_rate,
                format_currency(*overdraft_limit),
            ),
        }
    }

    /// Holder, balance and IBAN lines shared by every detail view.
    fn holder_block(&self) -> String {
        format!(
            "Titular: {}\nDNI: {}\nSaldo: {}\nIBAN: {}",
            self.holder.full_name(),
            self.holder.national_id,
            format_currency(self.balance),
            self.iban,
        )
    }

    /// The common middle of both checking detail views.
    fn checking_block(&self, authorized_entities: &str) -> String {
        format!(
            "{}\nLista de Entidades Autorizadas: {}",
            self.holder_block(),
            authorized_entities,
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
