//! # Position-Indexed Token Set
//!
//! The per-account structure behind enumeration: an insertion-ordered vector
//! of token ids paired with a reverse map from id to vector position. The
//! pair makes every operation the ledger path needs constant-time:
//!
//! | Operation | Cost | Mechanism |
//! |-----------|------|-----------|
//! | `insert` | O(1) | append + map entry |
//! | `remove` | O(1) | swap-remove + position fixup |
//! | `contains` | O(1) | map lookup |
//! | `get` | O(1) | vector index |
//! | `page` | O(page) | slice copy |
//!
//! ## Bijection Invariant
//!
//! `positions[id] == p` if and only if `items[p] == id`, and both structures
//! hold exactly the same ids. Every mutation here restores the bijection
//! before returning; nothing else in the crate touches the two fields.
//!
//! ## Order Is Not Stable Across Removals
//!
//! `remove` relocates the tail element into the vacated slot instead of
//! shifting the suffix. Enumeration order is therefore insertion order only
//! until the first removal, and positions observed before a mutation may
//! name different ids after it. Callers that need a stable view must not
//! interleave mutations with their scan.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared_types::TokenId;

use crate::domain::value_objects::TokenPage;

/// Insertion-ordered set of token ids with O(1) membership, O(1) removal,
/// and O(1) positional access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    /// Held token ids in enumeration order.
    items: Vec<TokenId>,
    /// Reverse lookup: token id to its current position in `items`.
    positions: HashMap<TokenId, usize>,
}

impl TokenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set sized for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Build a set from an id list, keeping the first occurrence of any
    /// duplicate. This is the deserialization path: only the ordered list is
    /// persisted and the reverse map is rebuilt from it.
    pub fn from_items(items: Vec<TokenId>) -> Self {
        let mut set = Self::with_capacity(items.len());
        for token in items {
            set.insert(token);
        }
        set
    }

    /// Number of ids in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the set holds no ids.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when `token` is a member.
    pub fn contains(&self, token: TokenId) -> bool {
        self.positions.contains_key(&token)
    }

    /// Add `token` to the tail of the enumeration.
    ///
    /// Returns `true` when the set changed, `false` when the id was already
    /// a member (the set is untouched, including its order).
    pub fn insert(&mut self, token: TokenId) -> bool {
        if self.positions.contains_key(&token) {
            return false;
        }
        self.positions.insert(token, self.items.len());
        self.items.push(token);
        true
    }

    /// Remove `token` in O(1) by swapping the tail into its slot.
    ///
    /// Returns `true` when the set changed, `false` when the id was not a
    /// member. The relocated tail id (if any) takes over the vacated
    /// position; all other positions are untouched.
    pub fn remove(&mut self, token: TokenId) -> bool {
        let Some(position) = self.positions.remove(&token) else {
            return false;
        };
        self.items.swap_remove(position);
        // swap_remove moved the old tail into `position` unless the removed
        // id was the tail itself; its reverse entry must follow it.
        if let Some(&moved) = self.items.get(position) {
            self.positions.insert(moved, position);
        }
        true
    }

    /// The id at enumeration `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<TokenId> {
        self.items.get(position).copied()
    }

    /// Copy out one page of ids starting at `cursor`.
    ///
    /// Total over all inputs: a cursor at or past the end yields an empty
    /// page, an oversized `page_size` is clamped to the remainder, and the
    /// cursor arithmetic saturates instead of overflowing. The returned
    /// `next_cursor` never moves backwards from the request cursor.
    pub fn page(&self, cursor: usize, page_size: usize) -> TokenPage {
        let len = self.items.len();
        let start = cursor.min(len);
        let end = cursor.saturating_add(page_size).min(len);
        TokenPage {
            ids: self.items[start..end].to_vec(),
            next_cursor: cursor.max(end),
        }
    }

    /// Iterate ids in current enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.items.iter().copied()
    }

    /// The full enumeration as a slice.
    pub fn as_slice(&self) -> &[TokenId] {
        &self.items
    }
}

// Only the ordered id list is part of the wire/snapshot format; the reverse
// map is derived state and is rebuilt on load.
impl Serialize for TokenSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<TokenId>::deserialize(deserializer)?;
        Ok(Self::from_items(items))
    }
}
