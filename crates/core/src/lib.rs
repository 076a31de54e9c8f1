//! # Banco Core
//!
//! Core domain types for the account ledger: holders, the three account
//! variants, the in-memory registry, and the stateless operations over a
//! single account. No I/O lives here; persistence and the console shell
//! sit in their own crates.

pub mod account;
pub mod error;
pub mod iban;
pub mod ledger;
pub mod money;
pub mod ops;
pub mod person;

pub use account::{Account, AccountKind};
pub use error::{CoreError, CoreResult};
pub use iban::{generate_iban, generate_iban_with};
pub use ledger::Ledger;
pub use money::format_currency;
pub use person::Person;
