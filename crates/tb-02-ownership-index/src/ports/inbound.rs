//! Inbound Ports (Driving Ports)
//!
//! These traits define how external components drive the Ownership Index:
//! the balance ledger feeds deltas through [`BalanceDeltaSink`], and read
//! paths go through [`OwnershipQueries`]. Keeping the feed behind a trait
//! lets the ledger stay generic over its enumeration backend.

use shared_types::{Address, BalanceDelta, TokenId};

use crate::domain::{DeltaOutcome, OwnershipError, OwnershipIndex, TokenPage};

/// Consumer of per-leg balance deltas (Driving Port).
///
/// ## Sequencing Contract
///
/// The producer delivers exactly one delta per (account, token) pair per
/// operation leg, in the order the legs were applied, and only when
/// `old_balance != new_balance`. Under that contract membership in the
/// sink mirrors "balance is nonzero" at every step. Redundant re-delivery
/// is tolerated; a zero-to-zero delta is not.
pub trait BalanceDeltaSink {
    /// Apply one delta.
    ///
    /// # Returns
    /// The structural effect on membership, or
    /// [`OwnershipError::InvalidDelta`] for a zero-to-zero report.
    fn on_balance_delta(&mut self, delta: &BalanceDelta)
        -> Result<DeltaOutcome, OwnershipError>;
}

/// Read access to per-account holdings (Driving Port).
///
/// All methods are total except `token_at`, whose out-of-range lookup is a
/// real error rather than a clamp.
pub trait OwnershipQueries {
    /// Number of distinct tokens `account` holds.
    fn count(&self, account: &Address) -> usize;

    /// Token id at enumeration position `index` for `account`.
    fn token_at(&self, account: &Address, index: usize) -> Result<TokenId, OwnershipError>;

    /// One page of `account`'s holdings starting at `cursor`.
    fn page(&self, account: &Address, cursor: usize, page_size: usize) -> TokenPage;

    /// True when `account` holds `token`.
    fn contains(&self, account: &Address, token: TokenId) -> bool;
}

impl BalanceDeltaSink for OwnershipIndex {
    fn on_balance_delta(
        &mut self,
        delta: &BalanceDelta,
    ) -> Result<DeltaOutcome, OwnershipError> {
        self.apply_delta(delta)
    }
}

impl OwnershipQueries for OwnershipIndex {
    fn count(&self, account: &Address) -> usize {
        OwnershipIndex::count(self, account)
    }

    fn token_at(&self, account: &Address, index: usize) -> Result<TokenId, OwnershipError> {
        OwnershipIndex::token_at(self, account, index)
    }

    fn page(&self, account: &Address, cursor: usize, page_size: usize) -> TokenPage {
        OwnershipIndex::page(self, account, cursor, page_size)
    }

    fn contains(&self, account: &Address, token: TokenId) -> bool {
        OwnershipIndex::contains(self, account, token)
    }
}
