//! # Balance Book
//!
//! Flat (account, token) to balance storage. The book stores only nonzero
//! balances: a missing entry IS a zero balance, and every mutation that
//! lands on zero removes its entry. Memory therefore tracks live holdings,
//! and "entry exists" stays interchangeable with "balance is nonzero".
//!
//! All arithmetic is checked. The book never wraps, never goes negative,
//! and reports exactly what a failed mutation needed versus what was there.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared_types::{Address, Balance, TokenId};

use crate::domain::errors::LedgerError;

/// Authoritative token quantities, keyed by (account, token).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBook {
    balances: HashMap<(Address, TokenId), Balance>,
}

impl BalanceBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance, zero for accounts or tokens never seen.
    pub fn get(&self, account: &Address, token: TokenId) -> Balance {
        self.balances
            .get(&(*account, token))
            .copied()
            .unwrap_or(0)
    }

    /// Add `amount` to the balance.
    ///
    /// Returns the (old, new) pair on success. Fails with
    /// [`LedgerError::BalanceOverflow`] when the sum would exceed
    /// `Balance::MAX`, leaving the entry untouched.
    pub fn credit(
        &mut self,
        account: Address,
        token: TokenId,
        amount: Balance,
    ) -> Result<(Balance, Balance), LedgerError> {
        let old = self.get(&account, token);
        let new = old
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account, token })?;
        if new > 0 {
            self.balances.insert((account, token), new);
        }
        Ok((old, new))
    }

    /// Subtract `amount` from the balance.
    ///
    /// Returns the (old, new) pair on success. Fails with
    /// [`LedgerError::InsufficientBalance`] when the holding cannot cover
    /// the amount, leaving the entry untouched. A debit to zero removes the
    /// entry.
    pub fn debit(
        &mut self,
        account: Address,
        token: TokenId,
        amount: Balance,
    ) -> Result<(Balance, Balance), LedgerError> {
        let old = self.get(&account, token);
        let new = old
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                account,
                token,
                required: amount,
                available: old,
            })?;
        if new == 0 {
            self.balances.remove(&(account, token));
        } else {
            self.balances.insert((account, token), new);
        }
        Ok((old, new))
    }

    /// Number of live (account, token) entries, all of them nonzero.
    pub fn nonzero_entries(&self) -> usize {
        self.balances.len()
    }
}
