//! # Tokenbook Benchmarks
//!
//! Performance validation for the complexity claims the subsystems make:
//!
//! | Subsystem | Claim | Target |
//! |-----------|-------|--------|
//! | tb-02 TokenSet | O(1) insert/remove/contains | flat across set sizes |
//! | tb-02 OwnershipIndex | O(1) per delta | flat across index sizes |
//! | tb-01 TokenLedger | O(legs) per operation | linear in batch width |

use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::seq::SliceRandom;

use shared_types::{Address, BalanceDelta, TokenId};
use tb_01_balance_ledger::TokenLedger;
use tb_02_ownership_index::{OwnershipIndex, TokenSet};

// ============================================================================
// TB-02: Token Set Benchmarks
// The swap-remove design should make mutation cost independent of set size.
// ============================================================================

fn bench_token_set_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tb-02-token-set");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("insert_all", size), &size, |b, &n| {
            b.iter(|| {
                let mut set = TokenSet::with_capacity(n);
                for id in 0..n as TokenId {
                    set.insert(black_box(id));
                }
                black_box(set.len())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("remove_all_random_order", size),
            &size,
            |b, &n| {
                b.iter_batched(
                    || {
                        let set = TokenSet::from_items((0..n as TokenId).collect());
                        let mut order: Vec<TokenId> = (0..n as TokenId).collect();
                        order.shuffle(&mut rand::thread_rng());
                        (set, order)
                    },
                    |(mut set, order)| {
                        for id in order {
                            set.remove(id);
                        }
                        black_box(set.is_empty())
                    },
                    BatchSize::LargeInput,
                )
            },
        );

        let set = TokenSet::from_items((0..size as TokenId).collect());
        group.bench_with_input(BenchmarkId::new("page_walk_100", size), &set, |b, set| {
            b.iter(|| {
                let mut cursor = 0;
                let mut total = 0;
                loop {
                    let page = set.page(cursor, 100);
                    if page.ids.is_empty() {
                        break;
                    }
                    total += page.ids.len();
                    cursor = page.next_cursor;
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

// ============================================================================
// TB-02: Ownership Index Benchmarks
// Delta application against an already-populated account.
// ============================================================================

fn bench_ownership_index_deltas(c: &mut Criterion) {
    let mut group = c.benchmark_group("tb-02-ownership-index");
    group.measurement_time(Duration::from_secs(10));

    let account: Address = [1u8; 20];
    for size in [1_000usize, 10_000, 100_000] {
        let mut index = OwnershipIndex::new();
        for id in 0..size as TokenId {
            index
                .apply_delta(&BalanceDelta::new(account, id, 0, 1))
                .unwrap();
        }

        // Acquire then divest one fresh id: state returns to the baseline
        // after every iteration, so the measurement stays steady.
        group.throughput(Throughput::Elements(2));
        group.bench_with_input(
            BenchmarkId::new("acquire_divest_cycle", size),
            &size,
            |b, &n| {
                let fresh = n as TokenId;
                b.iter(|| {
                    index
                        .apply_delta(&BalanceDelta::new(account, fresh, 0, 1))
                        .unwrap();
                    index
                        .apply_delta(&BalanceDelta::new(account, fresh, 1, 0))
                        .unwrap();
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// TB-01: Full-Stack Ledger Benchmarks
// Operations measured through the service, index updates included.
// ============================================================================

fn bench_ledger_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tb-01-balance-ledger");

    let a: Address = [1u8; 20];
    let b: Address = [2u8; 20];

    // Ping-pong keeps both balances bounded for the whole run.
    let mut transfer_ledger = TokenLedger::new(OwnershipIndex::new());
    transfer_ledger.mint(a, 7, 1_000_000).unwrap();
    group.throughput(Throughput::Elements(2));
    group.bench_function("transfer_round_trip", |bench| {
        bench.iter(|| {
            transfer_ledger.transfer(a, b, 7, black_box(1)).unwrap();
            transfer_ledger.transfer(b, a, 7, black_box(1)).unwrap();
        })
    });

    // First iteration indexes all 100 ids; the rest are quantity-only.
    let ids: Vec<TokenId> = (0..100).collect();
    let amounts = vec![1u128; 100];
    let mut mint_ledger = TokenLedger::new(OwnershipIndex::new());
    group.throughput(Throughput::Elements(100));
    group.bench_function("mint_batch_100_ids", |bench| {
        bench.iter(|| {
            mint_ledger
                .mint_batch([3u8; 20], &ids, &amounts)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_token_set_operations,
    bench_ownership_index_deltas,
    bench_ledger_operations
);
criterion_main!(benches);
