//! # Banco Persistence
//!
//! File-backed storage for the account collection: one JSON document
//! holding every account (and its embedded holder), loaded at startup
//! and rewritten in full on save.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::AccountStore;
