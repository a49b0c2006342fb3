//! # Value Objects
//!
//! Configuration and query payloads for the ledger.

use serde::{Deserialize, Serialize};
use shared_types::{Balance, TokenId};

use crate::domain::errors::LedgerError;

/// Tunable limits for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Upper bound on balance-moving legs in one batch operation. A batch
    /// mint or burn of N ids is N legs; a batch transfer is 2N.
    pub max_batch_legs: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_batch_legs: 1_024,
        }
    }
}

impl LedgerConfig {
    /// Check the configuration before use.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.max_batch_legs == 0 {
            return Err(LedgerError::InvalidConfig(
                "max_batch_legs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of an account's holdings with the matching quantities.
///
/// `ids` and `balances` are parallel: `balances[i]` is the account's
/// current balance of `ids[i]`. `next_cursor` resumes the walk exactly like
/// the underlying membership page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldPage {
    /// Held token ids in current enumeration order.
    pub ids: Vec<TokenId>,
    /// Balance of each id in `ids`, same order.
    pub balances: Vec<Balance>,
    /// Cursor for the next page.
    pub next_cursor: usize,
}
