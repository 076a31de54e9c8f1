//! # Banco CLI
//!
//! Interactive console shell over the account ledger. The menu loop and
//! the console session are exposed as a library so integration tests can
//! drive a full session against in-memory buffers.

pub mod console;
pub mod menu;

pub use console::Console;
