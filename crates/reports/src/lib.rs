//! # Banco Reports
//!
//! Plain-text customer listing export: one line per account plus a
//! trailing total, overwritten on every run.

pub mod listing;

pub use listing::CustomerListing;
