//! # Core Domain Entities
//!
//! Defines the ledger entities shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Identity**: Address, `TokenId`
//! - **Quantities**: Balance
//! - **Events**: `BalanceDelta`

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: IDENTITY & QUANTITIES
// =============================================================================

/// A 20-byte Ethereum-style address.
///
/// All account fields across subsystems use [u8; 20].
pub type Address = [u8; 20];

/// Identifier of a token class within the multi-token ledger.
///
/// Practical id spaces fit comfortably in u128; native arithmetic and
/// hashing beat a big-integer type for every operation the ledger performs.
pub type TokenId = u128;

/// A token quantity in base units.
///
/// Balances are unsigned: a debit below zero is a rejected operation,
/// never a wrapped value. All balance arithmetic goes through
/// `checked_add` / `checked_sub`.
pub type Balance = u128;

/// Render an address as 0x-prefixed lowercase hex for logs and errors.
pub fn display_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

// =============================================================================
// CLUSTER B: EVENTS
// =============================================================================

/// One account's balance movement for one token.
///
/// The balance ledger (tb-01) emits exactly one `BalanceDelta` per affected
/// (account, token) pair for every mint, burn, and transfer leg, in the
/// order the legs were applied, and only when the balance actually changed
/// (`old_balance != new_balance`).
///
/// The payload carries both sides of the change so consumers never have to
/// query the ledger back: the ownership index (tb-02) reads only whether
/// each side is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDelta {
    /// The account whose balance moved.
    pub account: Address,
    /// The token class that moved.
    pub token: TokenId,
    /// Balance before the operation leg.
    pub old_balance: Balance,
    /// Balance after the operation leg.
    pub new_balance: Balance,
}

impl BalanceDelta {
    /// Build a delta from its four fields.
    pub fn new(
        account: Address,
        token: TokenId,
        old_balance: Balance,
        new_balance: Balance,
    ) -> Self {
        Self {
            account,
            token,
            old_balance,
            new_balance,
        }
    }
}
