//! # Domain Layer - Balance Ledger Subsystem
//!
//! Pure quantity bookkeeping. No I/O, no enumeration knowledge.
//!
//! ## Components
//!
//! - `balance_book`: flat (account, token) to balance storage
//! - `value_objects`: LedgerConfig, HeldPage
//! - `errors`: LedgerError enumeration

pub mod balance_book;
pub mod errors;
pub mod value_objects;

pub use balance_book::*;
pub use errors::*;
pub use value_objects::*;
