//! # Balance Ledger Subsystem (tb-01)
//!
//! The Balance Ledger is the system's authority for token quantities. It
//! owns every (account, token) balance, applies mints, burns, and transfers
//! atomically, and notifies its enumeration backend with one
//! [`BalanceDelta`](shared_types::BalanceDelta) per leg that actually moved
//! a balance.
//!
//! ## Choreography
//!
//! ```text
//!   mint / burn / transfer / *_batch
//!                │
//!                ↓
//!      [validate all legs]  ── any failure → error, nothing changed
//!                │
//!                ↓
//!      [apply legs in order] ──BalanceDelta──→ Ownership Index (tb-02)
//! ```
//!
//! ## Emission Contract
//!
//! - one delta per (account, token) leg, in declared leg order
//! - emitted only when `old_balance != new_balance`
//! - therefore a zero-to-zero delta is unconstructible through this crate
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): balance book, config, errors
//! - **Service Layer** (`service/`): [`TokenLedger`] orchestration, generic
//!   over the delta sink so enumeration stays a pluggable backend

pub mod domain;
pub mod service;

// Re-export main types for convenience
pub use domain::{BalanceBook, HeldPage, LedgerConfig, LedgerError};
pub use service::TokenLedger;
