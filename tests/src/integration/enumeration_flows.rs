//! # Enumeration Flow Tests
//!
//! Full-lifecycle flows across the two subsystems: every mutation goes
//! through the ledger (tb-01), every enumeration answer comes back from the
//! ownership index (tb-02) it feeds. Nothing here reaches into either
//! crate's internals; if these flows hold, the delta contract between the
//! two held.

#[cfg(test)]
mod tests {
    use rand::Rng;
    use shared_types::{Address, TokenId};
    use tb_01_balance_ledger::{LedgerError, TokenLedger};
    use tb_02_ownership_index::OwnershipIndex;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn addr(n: u8) -> Address {
        [n; 20]
    }

    fn ledger() -> TokenLedger<OwnershipIndex> {
        TokenLedger::new(OwnershipIndex::new())
    }

    // =============================================================================
    // LIFECYCLE FLOW: MINT → TRANSFER → BURN → BATCH → PAGINATE
    // =============================================================================

    /// One continuous session exercising every membership transition the
    /// ledger can produce, with enumeration checked after each stage.
    #[test]
    fn test_full_ownership_lifecycle() {
        init_tracing();
        let mut ledger = ledger();
        let a = addr(1);
        let b = addr(2);

        // Stage 1: first mint of each id grows the holding count.
        for (token, expected_count) in [(1, 1), (2, 2), (3, 3), (4, 4)] {
            ledger.mint(a, token, 10).unwrap();
            assert_eq!(ledger.held_count(&a), expected_count);
        }

        // Stage 2: minting more of a held id moves quantity only.
        ledger.mint(a, 1, 10).unwrap();
        assert_eq!(ledger.held_count(&a), 4);
        assert_eq!(ledger.balance_of(&a, 1), 20);

        // Stage 3: a transfer of an id the receiver lacks indexes it for
        // the receiver at position 0.
        ledger.transfer(a, b, 1, 1).unwrap();
        assert_eq!(ledger.held_count(&b), 1);
        assert_eq!(ledger.held_at(&b, 0).unwrap(), 1);

        // Stage 4: a transfer of an id the receiver already holds does not.
        ledger.transfer(a, b, 1, 1).unwrap();
        assert_eq!(ledger.held_count(&b), 1);

        // Stage 5: sending the whole remaining balance divests the sender.
        let remaining = ledger.balance_of(&a, 1);
        ledger.transfer(a, b, 1, remaining).unwrap();
        assert_eq!(ledger.held_count(&a), 3);
        assert!(!ledger.holds(&a, 1));

        // Stage 6: a partial burn keeps the holder indexed.
        ledger.burn(b, 1, 1).unwrap();
        assert_eq!(ledger.held_count(&b), 1);

        // Stage 7: burning the rest divests the holder.
        let rest = ledger.balance_of(&b, 1);
        ledger.burn(b, 1, rest).unwrap();
        assert_eq!(ledger.held_count(&b), 0);

        // Stage 8: a batch transfer of two new ids indexes both.
        ledger.transfer_batch(a, b, &[2, 3], &[1, 1]).unwrap();
        assert_eq!(ledger.held_count(&b), 2);

        // Stage 9: a batch mixing a held id with a new one indexes only
        // the new one.
        ledger.transfer_batch(a, b, &[2, 4], &[1, 1]).unwrap();
        assert_eq!(ledger.held_count(&b), 3);

        // Stage 10: a batch draining the sender's whole balance of both
        // ids divests both at once.
        let drained = ledger.held_count(&a);
        ledger.transfer_batch(a, b, &[2, 4], &[8, 9]).unwrap();
        assert_eq!(ledger.held_count(&a), drained - 2);

        // Stage 11: the same id twice in one batch indexes the receiver
        // once, not twice.
        ledger.transfer_batch(b, a, &[2, 2], &[5, 2]).unwrap();
        assert_eq!(ledger.held_count(&a), drained - 1);
        assert_eq!(ledger.balance_of(&a, 2), 7);
        assert!(ledger.holds(&b, 2));

        // Stage 12: the paged view agrees with the flat view at the end.
        let page = ledger.held_page(&b, 0, 10);
        assert_eq!(page.ids, vec![2, 3, 4]);
        assert_eq!(page.balances, vec![3, 1, 10]);
        assert_eq!(page.next_cursor, 3);
    }

    // =============================================================================
    // PAGINATION
    // =============================================================================

    #[test]
    fn test_paginated_walk_page_count_matches_ceiling() {
        let mut ledger = ledger();
        let a = addr(1);
        ledger
            .mint_batch(a, &[10, 20, 30, 40, 50], &[1, 1, 1, 1, 1])
            .unwrap();
        let count = ledger.held_count(&a);

        // Page size 1, uneven, exact divisor, and wider than the set.
        for per_page in [1, 2, 5, 7] {
            let expected_pages = (count + per_page - 1) / per_page;

            let mut pages = 0;
            let mut ids_seen = 0;
            let mut cursor = 0;
            loop {
                let page = ledger.held_page(&a, cursor, per_page);
                if page.ids.is_empty() {
                    break;
                }
                pages += 1;
                ids_seen += page.ids.len();
                cursor = page.next_cursor;
            }

            assert_eq!(pages, expected_pages, "page size {per_page}");
            assert_eq!(ids_seen, count, "page size {per_page}");
            assert_eq!(cursor, count, "page size {per_page}");
        }
    }

    /// Cursors are positions, not pinned ids. A removal between pages
    /// relocates the tail id into already-visited territory, and the
    /// resumed walk silently misses it. The walk must stay total anyway.
    #[test]
    fn test_cursor_resumption_after_removal_skips_relocated_id() {
        let mut ledger = ledger();
        let a = addr(1);
        ledger
            .mint_batch(a, &[1, 2, 3, 4], &[5, 5, 5, 5])
            .unwrap();

        let first = ledger.held_page(&a, 0, 2);
        assert_eq!(first.ids, vec![1, 2]);

        // Fully divest id 1 between pages: the tail id 4 takes over the
        // vacated position 0, which the walk already passed.
        ledger.burn(a, 1, 5).unwrap();

        let second = ledger.held_page(&a, first.next_cursor, 2);
        assert_eq!(second.ids, vec![3]);
        assert_eq!(second.next_cursor, 3);

        let seen: Vec<TokenId> = first.ids.iter().chain(&second.ids).copied().collect();
        assert!(!seen.contains(&4));
        assert!(ledger.holds(&a, 4));
    }

    // =============================================================================
    // RANDOMIZED CONSISTENCY
    // =============================================================================

    /// Drive thousands of random operations, then reconcile: enumeration
    /// must mirror "balance is nonzero" exactly, account by account.
    #[test]
    fn test_randomized_operations_keep_index_consistent_with_balances() {
        let mut rng = rand::thread_rng();
        let mut ledger = ledger();
        let accounts: Vec<Address> = (1..=4).map(addr).collect();
        let tokens: Vec<TokenId> = (1..=6).collect();

        for _ in 0..5_000 {
            let account = accounts[rng.gen_range(0..accounts.len())];
            let token = tokens[rng.gen_range(0..tokens.len())];
            let amount = rng.gen_range(0..50u128);

            let result = match rng.gen_range(0..3) {
                0 => ledger.mint(account, token, amount),
                1 => ledger.burn(account, token, amount),
                _ => {
                    let to = accounts[rng.gen_range(0..accounts.len())];
                    ledger.transfer(account, to, token, amount)
                }
            };
            match result {
                Ok(()) => {}
                // Overdrafts are expected under random amounts; anything
                // else is a real failure.
                Err(LedgerError::InsufficientBalance { .. }) => {}
                Err(other) => panic!("unexpected ledger error: {other}"),
            }
        }

        for account in &accounts {
            let mut expected: Vec<TokenId> = tokens
                .iter()
                .copied()
                .filter(|&token| ledger.balance_of(account, token) > 0)
                .collect();
            expected.sort_unstable();

            assert_eq!(ledger.held_count(account), expected.len());
            for &token in &tokens {
                assert_eq!(
                    ledger.holds(account, token),
                    ledger.balance_of(account, token) > 0
                );
            }

            // A quiescent paged walk covers each held id exactly once,
            // with its live balance attached.
            let mut seen = Vec::new();
            let mut cursor = 0;
            loop {
                let page = ledger.held_page(account, cursor, 2);
                if page.ids.is_empty() {
                    break;
                }
                for (&id, &balance) in page.ids.iter().zip(&page.balances) {
                    assert!(balance > 0);
                    assert_eq!(balance, ledger.balance_of(account, id));
                }
                seen.extend_from_slice(&page.ids);
                cursor = page.next_cursor;
            }
            seen.sort_unstable();
            assert_eq!(seen, expected);
        }
    }

    // =============================================================================
    // SNAPSHOT
    // =============================================================================

    #[test]
    fn test_index_snapshot_preserves_enumeration_mid_flow() {
        let mut ledger = ledger();
        let a = addr(1);
        ledger
            .mint_batch(a, &[1, 2, 3], &[10, 10, 10])
            .unwrap();
        ledger.burn(a, 2, 10).unwrap();

        let bytes = bincode::serialize(ledger.index()).unwrap();
        let restored: OwnershipIndex = bincode::deserialize(&bytes).unwrap();

        assert_eq!(&restored, ledger.index());
        assert_eq!(restored.count(&a), ledger.held_count(&a));
        assert_eq!(
            restored.page(&a, 0, 10).ids,
            ledger.held_page(&a, 0, 10).ids
        );
    }
}
