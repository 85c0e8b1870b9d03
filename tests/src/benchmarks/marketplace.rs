//! # Marketplace Benchmarks
//!
//! - Composite key encode/split on the hot path of every lookup
//! - `buy` end to end: three reads, validation, one batch commit
//! - Snapshot scan as the asset namespace grows

use am_01_ledger_store::{create_composite_key, split_composite_key, InMemoryKVStore};
use am_02_marketplace::prelude::*;
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};

fn market_with_assets(count: usize) -> (MarketplaceService<InMemoryKVStore>, FixedCredential) {
    let mut service = MarketplaceService::in_memory();
    let owner = FixedCredential::new("bench-owner");
    service
        .enroll(&owner, "Owner")
        .expect("enroll owner");
    for i in 0..count {
        service
            .create_asset(&owner, &format!("asset-{i}"))
            .expect("create asset");
    }
    (service, owner)
}

pub fn bench_composite_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("am-01-composite-key");
    let id = resolve_identity(b"bench-owner");

    group.bench_function("create", |b| {
        b.iter(|| create_composite_key(black_box(TRADER_NAMESPACE), &[black_box(id.as_str())]))
    });

    let key = create_composite_key(TRADER_NAMESPACE, &[id.as_str()]).expect("key");
    group.bench_function("split", |b| b.iter(|| split_composite_key(black_box(&key))));

    group.finish();
}

pub fn bench_buy(c: &mut Criterion) {
    let mut group = c.benchmark_group("am-02-buy");

    for existing in [0usize, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("settle", existing),
            &existing,
            |b, &existing| {
                b.iter_batched(
                    || {
                        let (mut service, owner) = market_with_assets(existing);
                        let buyer = FixedCredential::new("bench-buyer");
                        service.enroll(&buyer, "Buyer").expect("enroll buyer");
                        let asset = service
                            .create_asset(&owner, "prize")
                            .expect("create prize")
                            .id();
                        service
                            .list_for_sale(&owner, &asset, 250)
                            .expect("list prize");
                        (service, buyer, asset)
                    },
                    |(mut service, buyer, asset)| {
                        black_box(service.buy(&buyer, &asset).expect("buy"))
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

pub fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("am-02-snapshot");

    for count in [10usize, 100, 1_000] {
        let (service, owner) = market_with_assets(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("list", count), &count, |b, _| {
            b.iter(|| black_box(service.list_snapshot(&owner).expect("snapshot")))
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_composite_keys(c);
    bench_buy(c);
    bench_snapshot(c);
}
