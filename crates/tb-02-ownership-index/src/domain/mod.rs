//! # Domain Layer - Ownership Index Subsystem
//!
//! Pure enumeration logic. No I/O, no clocks, no locks.
//!
//! ## Components
//!
//! - `token_set`: position-indexed set of token ids (the per-account structure)
//! - `index`: account registry applying zero-crossing transitions
//! - `value_objects`: TokenPage, DeltaOutcome, IndexStats
//! - `errors`: OwnershipError enumeration

pub mod errors;
pub mod index;
pub mod token_set;
pub mod value_objects;

pub use errors::*;
pub use index::*;
pub use token_set::*;
pub use value_objects::*;
