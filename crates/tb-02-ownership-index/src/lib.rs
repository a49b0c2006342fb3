//! # Ownership Index Subsystem (tb-02)
//!
//! The Ownership Index answers one question in O(1): *which token classes
//! does an account currently hold?* The balance ledger (tb-01) owns the
//! quantities; this subsystem mirrors only the **membership** those
//! quantities imply, so enumeration never scans the balance book.
//!
//! ## Choreography
//!
//! ```text
//! Balance Ledger (tb-01) ──BalanceDelta──→ Ownership Index (tb-02)
//!         │                                        │
//!         │ owns quantities                        │ owns enumeration
//!         ↓                                        ↓
//!   balance_of(account, token)        count / token_at / page / contains
//! ```
//!
//! The ledger emits one [`BalanceDelta`](shared_types::BalanceDelta) per
//! affected (account, token) pair, in operation order, and only when the
//! balance actually moved. The index reads nothing but the zero-ness of the
//! two sides:
//!
//! - `0 → n>0` inserts the token into the account's set
//! - `n>0 → 0` removes it
//! - `n>0 → m>0` leaves membership untouched
//! - `0 → 0` is a contract violation and is rejected
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement | Location |
//! |-----------|-------------|----------|
//! | Set/map bijection | swap-remove with position fixup | token_set.rs |
//! | Membership mirrors nonzero balance | zero-crossing transitions only | index.rs |
//! | Pagination totality | cursors clamped, never an error | token_set.rs |
//! | Bounded memory | empty sets dropped from the registry | index.rs |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): pure set and index logic, no I/O
//! - **Ports Layer** (`ports/`): inbound traits the ledger drives

pub mod domain;
pub mod ports;

// Re-export main types for convenience
pub use domain::{
    DeltaOutcome, IndexStats, OwnershipError, OwnershipIndex, TokenPage, TokenSet,
};

pub use ports::{BalanceDeltaSink, OwnershipQueries};
