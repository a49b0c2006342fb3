//! Ports Layer
//!
//! Hexagonal boundary of the Ownership Index subsystem. The index has no
//! outbound dependencies, so only driving ports exist: the delta feed the
//! ledger pushes into, and the query surface read paths consume.

pub mod inbound;

pub use inbound::{BalanceDeltaSink, OwnershipQueries};
