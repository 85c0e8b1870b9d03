//! # Asset Marketplace Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | am-01-composite-key | key encode and split |
//! | am-02-buy | full purchase with commit, by ledger size |
//! | am-02-snapshot | listing scan, by asset count |

use am_tests::benchmarks::marketplace;
use criterion::{criterion_group, criterion_main, Criterion};

fn marketplace_benchmarks(c: &mut Criterion) {
    marketplace::register_benchmarks(c);
}

criterion_group!(benches, marketplace_benchmarks);
criterion_main!(benches);
