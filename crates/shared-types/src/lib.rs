//! # Shared Types Crate
//!
//! This crate contains the domain type aliases and the balance-delta event
//! payload exchanged between the balance ledger (tb-01) and the ownership
//! index (tb-02).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Plain Payloads**: Event payloads are inert data; the zero-crossing
//!   interpretation of a delta belongs to the ownership index, not the
//!   payload itself.

pub mod entities;

pub use entities::*;
