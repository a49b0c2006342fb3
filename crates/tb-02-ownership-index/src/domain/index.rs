//! # Ownership Index
//!
//! Registry of per-account [`TokenSet`]s, driven exclusively by balance
//! deltas from the ledger. Membership here mirrors "balance is nonzero"
//! exactly, as long as every emitted delta is applied in order.
//!
//! ## Zero-Crossing State Machine
//!
//! For one (account, token) pair, the only state is present/absent:
//!
//! ```text
//!            old = 0, new > 0
//!   ABSENT ───────────────────→ PRESENT ──┐
//!      ↑                                   │ old > 0, new > 0
//!      └──────────────────── PRESENT ←────┘   (no transition)
//!            old > 0, new = 0
//! ```
//!
//! A delta with `old == 0 && new == 0` fits no arrow and is rejected.
//! Redundant reports (an acquisition for a token already present, a
//! divestment for one already absent) are idempotent no-ops, so replaying
//! an overlapping delta cannot corrupt the index.
//!
//! ## Registry Hygiene
//!
//! An account whose last token is removed leaves the registry entirely.
//! Memory stays proportional to live (account, token) memberships, and
//! `accounts_tracked` counts exactly the accounts holding something.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared_types::{display_address, Address, BalanceDelta, TokenId};

use crate::domain::errors::OwnershipError;
use crate::domain::token_set::TokenSet;
use crate::domain::value_objects::{DeltaOutcome, IndexStats, TokenPage};

/// Per-account ownership registry.
///
/// All mutation flows through [`OwnershipIndex::apply_delta`]; queries are
/// read-only and total except for [`OwnershipIndex::token_at`], which is the
/// one positional lookup that reports a range error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipIndex {
    /// Accounts with at least one held token. No entry is ever empty.
    sets: HashMap<Address, TokenSet>,
    /// Lifetime mutation counters; the per-snapshot fields are computed on
    /// demand by [`OwnershipIndex::stats`].
    stats: IndexStats,
}

impl OwnershipIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one balance delta, mutating membership only on a zero crossing.
    ///
    /// Returns the structural effect. The only error is the zero-to-zero
    /// delta, which the ledger contract forbids; the index is untouched in
    /// that case.
    pub fn apply_delta(&mut self, delta: &BalanceDelta) -> Result<DeltaOutcome, OwnershipError> {
        let outcome = match (delta.old_balance, delta.new_balance) {
            (0, 0) => {
                tracing::warn!(
                    "Rejected zero-to-zero delta for account {}, token {}",
                    display_address(&delta.account),
                    delta.token
                );
                return Err(OwnershipError::InvalidDelta {
                    account: delta.account,
                    token: delta.token,
                });
            }
            // Acquisition: the account now holds a token it did not.
            (0, _) => {
                let set = self.sets.entry(delta.account).or_default();
                if set.insert(delta.token) {
                    self.stats.inserts += 1;
                    tracing::debug!(
                        "Indexed token {} for account {}",
                        delta.token,
                        display_address(&delta.account)
                    );
                    DeltaOutcome::Inserted
                } else {
                    self.stats.quantity_changes += 1;
                    DeltaOutcome::Unchanged
                }
            }
            // Divestment: the account no longer holds this token.
            (_, 0) => {
                let removed = match self.sets.get_mut(&delta.account) {
                    Some(set) => {
                        let removed = set.remove(delta.token);
                        if removed && set.is_empty() {
                            self.sets.remove(&delta.account);
                        }
                        removed
                    }
                    None => false,
                };
                if removed {
                    self.stats.removes += 1;
                    tracing::debug!(
                        "Dropped token {} for account {}",
                        delta.token,
                        display_address(&delta.account)
                    );
                    DeltaOutcome::Removed
                } else {
                    self.stats.quantity_changes += 1;
                    DeltaOutcome::Unchanged
                }
            }
            // Nonzero to nonzero: quantity moved, membership did not.
            _ => {
                self.stats.quantity_changes += 1;
                DeltaOutcome::Unchanged
            }
        };
        Ok(outcome)
    }

    /// Number of distinct tokens `account` currently holds.
    pub fn count(&self, account: &Address) -> usize {
        self.sets.get(account).map(TokenSet::len).unwrap_or(0)
    }

    /// The token id at enumeration position `index` for `account`.
    ///
    /// The reported `count` in the error is the account's current holding
    /// count, which is 0 for accounts the index does not track.
    pub fn token_at(&self, account: &Address, index: usize) -> Result<TokenId, OwnershipError> {
        let set = self.sets.get(account);
        set.and_then(|s| s.get(index))
            .ok_or(OwnershipError::IndexOutOfRange {
                index,
                count: set.map(TokenSet::len).unwrap_or(0),
            })
    }

    /// One page of `account`'s held token ids starting at `cursor`.
    ///
    /// Total: unknown accounts and out-of-range cursors yield an empty page
    /// anchored at the request cursor.
    pub fn page(&self, account: &Address, cursor: usize, page_size: usize) -> TokenPage {
        match self.sets.get(account) {
            Some(set) => set.page(cursor, page_size),
            None => TokenPage::empty(cursor),
        }
    }

    /// True when `account` currently holds `token`.
    pub fn contains(&self, account: &Address, token: TokenId) -> bool {
        self.sets
            .get(account)
            .map(|set| set.contains(token))
            .unwrap_or(false)
    }

    /// Number of accounts holding at least one token.
    pub fn accounts_tracked(&self) -> usize {
        self.sets.len()
    }

    /// Current index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            accounts_tracked: self.sets.len(),
            tokens_indexed: self.sets.values().map(TokenSet::len).sum(),
            inserts: self.stats.inserts,
            removes: self.stats.removes,
            quantity_changes: self.stats.quantity_changes,
        }
    }
}
