//! # Token Ledger Service
//!
//! [`TokenLedger`] is the write path of the system: every mint, burn, and
//! transfer flows through it, and it alone feeds the enumeration backend.
//!
//! ## Two-Phase Operations
//!
//! Each operation expands into balance-moving legs. Phase one validates all
//! legs against a scratch view of the book, so a failure anywhere rejects
//! the whole operation before anything mutates. Phase two applies the legs
//! in declared order and emits one [`BalanceDelta`] per leg whose balance
//! actually moved. Multi-leg operations are therefore atomic, and the sink
//! observes per-pair deltas in exactly the order the legs landed.

use std::collections::HashMap;

use shared_types::{display_address, Address, Balance, BalanceDelta, TokenId};
use tb_02_ownership_index::{BalanceDeltaSink, OwnershipQueries};

use crate::domain::{BalanceBook, HeldPage, LedgerConfig, LedgerError};

/// Direction of one balance movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegOp {
    Credit,
    Debit,
}

/// One planned balance movement inside an operation.
#[derive(Debug, Clone, Copy)]
struct Leg {
    account: Address,
    token: TokenId,
    amount: Balance,
    op: LegOp,
}

impl Leg {
    fn credit(account: Address, token: TokenId, amount: Balance) -> Self {
        Self {
            account,
            token,
            amount,
            op: LegOp::Credit,
        }
    }

    fn debit(account: Address, token: TokenId, amount: Balance) -> Self {
        Self {
            account,
            token,
            amount,
            op: LegOp::Debit,
        }
    }
}

/// Multi-token ledger orchestrating balances and enumeration.
///
/// Generic over the delta sink so the enumeration backend is injected; in
/// the default wiring `S` is
/// [`OwnershipIndex`](tb_02_ownership_index::OwnershipIndex).
pub struct TokenLedger<S: BalanceDeltaSink> {
    /// Authoritative quantities.
    book: BalanceBook,
    /// Enumeration backend fed one delta per moved leg.
    index: S,
    /// Operation limits.
    config: LedgerConfig,
}

impl<S: BalanceDeltaSink> TokenLedger<S> {
    /// Create a ledger with default configuration.
    pub fn new(index: S) -> Self {
        Self {
            book: BalanceBook::new(),
            index,
            config: LedgerConfig::default(),
        }
    }

    /// Create a ledger with custom configuration.
    pub fn with_config(index: S, config: LedgerConfig) -> Self {
        Self {
            book: BalanceBook::new(),
            index,
            config,
        }
    }

    /// Create `amount` new units of `token` for `to`.
    pub fn mint(&mut self, to: Address, token: TokenId, amount: Balance) -> Result<(), LedgerError> {
        self.execute(&[Leg::credit(to, token, amount)])?;
        tracing::info!(
            "[tb-01] Minted {} of token {} to {}",
            amount,
            token,
            display_address(&to)
        );
        Ok(())
    }

    /// Mint several token classes to `to` in one atomic operation.
    ///
    /// `tokens` and `amounts` are parallel arrays; a length mismatch or a
    /// batch beyond the configured leg cap rejects the whole operation.
    pub fn mint_batch(
        &mut self,
        to: Address,
        tokens: &[TokenId],
        amounts: &[Balance],
    ) -> Result<(), LedgerError> {
        self.check_batch_shape(tokens.len(), amounts.len(), tokens.len())?;
        let legs: Vec<Leg> = tokens
            .iter()
            .zip(amounts)
            .map(|(&token, &amount)| Leg::credit(to, token, amount))
            .collect();
        self.execute(&legs)?;
        tracing::info!(
            "[tb-01] Minted batch of {} token classes to {}",
            tokens.len(),
            display_address(&to)
        );
        Ok(())
    }

    /// Destroy `amount` units of `token` held by `from`.
    pub fn burn(
        &mut self,
        from: Address,
        token: TokenId,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        self.execute(&[Leg::debit(from, token, amount)])?;
        tracing::info!(
            "[tb-01] Burned {} of token {} from {}",
            amount,
            token,
            display_address(&from)
        );
        Ok(())
    }

    /// Burn several token classes from `from` in one atomic operation.
    pub fn burn_batch(
        &mut self,
        from: Address,
        tokens: &[TokenId],
        amounts: &[Balance],
    ) -> Result<(), LedgerError> {
        self.check_batch_shape(tokens.len(), amounts.len(), tokens.len())?;
        let legs: Vec<Leg> = tokens
            .iter()
            .zip(amounts)
            .map(|(&token, &amount)| Leg::debit(from, token, amount))
            .collect();
        self.execute(&legs)?;
        tracing::info!(
            "[tb-01] Burned batch of {} token classes from {}",
            tokens.len(),
            display_address(&from)
        );
        Ok(())
    }

    /// Move `amount` units of `token` from `from` to `to`.
    ///
    /// Expands to a debit leg then a credit leg, so the sink sees the
    /// sender's delta before the receiver's. A failure on either side
    /// (overdraft, receiver overflow) leaves both accounts untouched.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        token: TokenId,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        self.execute(&[
            Leg::debit(from, token, amount),
            Leg::credit(to, token, amount),
        ])?;
        tracing::info!(
            "[tb-01] Transferred {} of token {} from {} to {}",
            amount,
            token,
            display_address(&from),
            display_address(&to)
        );
        Ok(())
    }

    /// Move several token classes from `from` to `to` in one atomic
    /// operation.
    ///
    /// Legs interleave per id (debit, credit, debit, credit, ...), so a
    /// repeated id in `tokens` sees the balances left by its earlier
    /// occurrences. The leg cap counts both sides: N ids cost 2N legs.
    pub fn transfer_batch(
        &mut self,
        from: Address,
        to: Address,
        tokens: &[TokenId],
        amounts: &[Balance],
    ) -> Result<(), LedgerError> {
        self.check_batch_shape(
            tokens.len(),
            amounts.len(),
            tokens.len().saturating_mul(2),
        )?;
        let mut legs = Vec::with_capacity(tokens.len().saturating_mul(2));
        for (&token, &amount) in tokens.iter().zip(amounts) {
            legs.push(Leg::debit(from, token, amount));
            legs.push(Leg::credit(to, token, amount));
        }
        self.execute(&legs)?;
        tracing::info!(
            "[tb-01] Transferred batch of {} token classes from {} to {}",
            tokens.len(),
            display_address(&from),
            display_address(&to)
        );
        Ok(())
    }

    /// Current balance of `token` for `account`, zero when never held.
    pub fn balance_of(&self, account: &Address, token: TokenId) -> Balance {
        self.book.get(account, token)
    }

    /// Balances for parallel (account, token) pairs.
    pub fn balance_of_batch(
        &self,
        accounts: &[Address],
        tokens: &[TokenId],
    ) -> Result<Vec<Balance>, LedgerError> {
        if accounts.len() != tokens.len() {
            return Err(LedgerError::BatchLengthMismatch(
                accounts.len(),
                tokens.len(),
            ));
        }
        Ok(accounts
            .iter()
            .zip(tokens)
            .map(|(account, &token)| self.book.get(account, token))
            .collect())
    }

    /// Operation limits in effect.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Read access to the enumeration backend.
    pub fn index(&self) -> &S {
        &self.index
    }

    /// Validate batch array shape and the expanded leg count.
    fn check_batch_shape(
        &self,
        ids: usize,
        amounts: usize,
        legs: usize,
    ) -> Result<(), LedgerError> {
        self.config.validate()?;
        if ids != amounts {
            return Err(LedgerError::BatchLengthMismatch(ids, amounts));
        }
        if legs > self.config.max_batch_legs {
            return Err(LedgerError::BatchTooLarge {
                legs,
                max: self.config.max_batch_legs,
            });
        }
        Ok(())
    }

    /// Run one operation's legs through validate-then-apply.
    fn execute(&mut self, legs: &[Leg]) -> Result<(), LedgerError> {
        // Phase 1: walk every leg against a scratch view seeded from the
        // book. Later legs see the balances earlier legs would leave, so a
        // repeated (account, token) pair validates against its running
        // value. Nothing mutates in this phase.
        //
        // The arithmetic here mirrors BalanceBook::credit / debit exactly.
        let mut scratch: HashMap<(Address, TokenId), Balance> = HashMap::new();
        for leg in legs {
            let key = (leg.account, leg.token);
            let old = match scratch.get(&key) {
                Some(&balance) => balance,
                None => self.book.get(&leg.account, leg.token),
            };
            let new = match leg.op {
                LegOp::Credit => {
                    old.checked_add(leg.amount)
                        .ok_or(LedgerError::BalanceOverflow {
                            account: leg.account,
                            token: leg.token,
                        })?
                }
                LegOp::Debit => {
                    old.checked_sub(leg.amount)
                        .ok_or(LedgerError::InsufficientBalance {
                            account: leg.account,
                            token: leg.token,
                            required: leg.amount,
                            available: old,
                        })?
                }
            };
            scratch.insert(key, new);
        }

        // Phase 2: apply in declared order. Validation cannot be undone
        // halfway, and the sink hears about each pair the moment its
        // balance lands. Legs that moved nothing stay silent.
        for leg in legs {
            let (old, new) = match leg.op {
                LegOp::Credit => self.book.credit(leg.account, leg.token, leg.amount)?,
                LegOp::Debit => self.book.debit(leg.account, leg.token, leg.amount)?,
            };
            if old != new {
                let delta = BalanceDelta::new(leg.account, leg.token, old, new);
                self.index.on_balance_delta(&delta)?;
            }
        }
        Ok(())
    }
}

/// Enumeration facade, available when the injected sink also answers
/// ownership queries.
impl<S: BalanceDeltaSink + OwnershipQueries> TokenLedger<S> {
    /// Number of distinct tokens `account` currently holds.
    pub fn held_count(&self, account: &Address) -> usize {
        self.index.count(account)
    }

    /// Token id at enumeration position `index` for `account`.
    pub fn held_at(&self, account: &Address, index: usize) -> Result<TokenId, LedgerError> {
        Ok(self.index.token_at(account, index)?)
    }

    /// True when `account` holds a nonzero balance of `token`.
    pub fn holds(&self, account: &Address, token: TokenId) -> bool {
        self.index.contains(account, token)
    }

    /// One page of `account`'s holdings with matching balances.
    pub fn held_page(&self, account: &Address, cursor: usize, page_size: usize) -> HeldPage {
        let page = self.index.page(account, cursor, page_size);
        let balances = page
            .ids
            .iter()
            .map(|&token| self.book.get(account, token))
            .collect();
        HeldPage {
            ids: page.ids,
            balances,
            next_cursor: page.next_cursor,
        }
    }
}
