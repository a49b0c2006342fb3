//! # Service Layer - Balance Ledger Subsystem
//!
//! Orchestrates the balance book and the enumeration backend behind one
//! transactional API.

pub mod ledger_service;

pub use ledger_service::TokenLedger;
