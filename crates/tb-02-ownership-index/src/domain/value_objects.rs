//! # Value Objects
//!
//! Immutable data carried across the index boundary.

use serde::{Deserialize, Serialize};
use shared_types::TokenId;

/// One page of an account's held token ids.
///
/// Pagination is positional and total: any (cursor, `page_size`) pair yields
/// a page. Requests past the end produce an empty page whose `next_cursor`
/// equals the request cursor, so a resumption loop terminates on
/// `ids.is_empty()` or on `next_cursor == count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPage {
    /// Token ids in current enumeration order, at most `page_size` of them.
    pub ids: Vec<TokenId>,
    /// Cursor for the next page: `max(cursor, min(cursor + page_size, count))`.
    pub next_cursor: usize,
}

impl TokenPage {
    /// An empty page anchored at the request cursor.
    pub fn empty(cursor: usize) -> Self {
        Self {
            ids: Vec::new(),
            next_cursor: cursor,
        }
    }
}

/// Structural effect of one applied balance delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaOutcome {
    /// Zero-to-nonzero crossing: the token entered the account's set.
    Inserted,
    /// Nonzero-to-zero crossing: the token left the account's set.
    Removed,
    /// Quantity moved without crossing zero, or the report was redundant;
    /// membership is untouched.
    Unchanged,
}

/// Counters describing the index as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Accounts currently holding at least one token.
    pub accounts_tracked: usize,
    /// Total (account, token) memberships across all sets.
    pub tokens_indexed: usize,
    /// Lifetime zero-to-nonzero crossings applied.
    pub inserts: u64,
    /// Lifetime nonzero-to-zero crossings applied.
    pub removes: u64,
    /// Lifetime applied deltas that left membership untouched.
    pub quantity_changes: u64,
}
