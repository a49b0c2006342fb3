//! # Domain Errors
//!
//! Error types for the Balance Ledger subsystem.

use shared_types::{Address, Balance, TokenId};
use thiserror::Error;
use tb_02_ownership_index::OwnershipError;

/// Errors raised by ledger operations.
///
/// Every failing operation leaves balances and enumeration exactly as they
/// were: validation runs before the first mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit larger than the account's holding of that token.
    #[error("Insufficient balance for account {account:?}, token {token}: required {required}, available {available}")]
    InsufficientBalance {
        account: Address,
        token: TokenId,
        required: Balance,
        available: Balance,
    },

    /// A credit that would push the balance past `Balance::MAX`.
    #[error("Balance overflow for account {account:?}, token {token}")]
    BalanceOverflow { account: Address, token: TokenId },

    /// Parallel batch arrays (ids and amounts, or accounts and ids) differ
    /// in length.
    #[error("Batch arrays differ in length: {0} vs {1}")]
    BatchLengthMismatch(usize, usize),

    /// A batch expanding to more balance-moving legs than the configured cap.
    #[error("Batch too large: {legs} legs exceeds limit {max}")]
    BatchTooLarge { legs: usize, max: usize },

    /// Rejected ledger configuration.
    #[error("Invalid ledger configuration: {0}")]
    InvalidConfig(String),

    /// Failure surfaced by the enumeration backend.
    #[error("Ownership index error: {0}")]
    Index(#[from] OwnershipError),
}
