//! # Domain Errors
//!
//! Error types for the Ownership Index subsystem.

use shared_types::{Address, TokenId};
use thiserror::Error;

/// Errors raised by the ownership index.
///
/// The error surface is deliberately small. Positional pagination clamps,
/// duplicate inserts and absent removes are idempotent no-ops, so only two
/// conditions are actual failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipError {
    /// Indexed lookup at or past the end of an account's holdings.
    #[error("Token index out of range: {index} >= count {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// A delta reporting zero balance on both sides. The ledger never emits
    /// one, so receiving it means the producer is broken; the index refuses
    /// to guess and mutates nothing.
    #[error("Invalid balance delta for account {account:?}, token {token}: old and new balance are both zero")]
    InvalidDelta { account: Address, token: TokenId },
}
