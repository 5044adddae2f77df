use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use perishable_inventory::{Inventory, Item};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Deterministic, unordered expiration offsets.
fn stocked(size: u64) -> Inventory {
    let mut inventory = Inventory::new();
    for i in 0..size {
        let offset = (i * 7919) % 365;
        inventory.add(Item::new(
            format!("Item {i}"),
            format!("C{}", i % 16),
            100,
            epoch() + Days::new(offset),
        ));
    }
    inventory
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [10u64, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::new("sorted_insert", size), size, |b, &size| {
            b.iter(|| black_box(stocked(size)));
        });
    }

    group.finish();
}

fn bench_sell(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell");

    for size in [100u64, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("partial_sale", size), size, |b, &size| {
            b.iter_with_setup(
                || stocked(size),
                |mut inventory| black_box(inventory.sell(black_box("C7"), 1)),
            );
        });
    }

    group.finish();
}

fn bench_expiry_sweep(c: &mut Criterion) {
    c.bench_function("remove_expired_half", |b| {
        let today = epoch() + Days::new(182);
        b.iter_with_setup(
            || stocked(1000),
            |mut inventory| black_box(inventory.remove_expired(today)),
        );
    });
}

criterion_group!(benches, bench_add, bench_sell, bench_expiry_sweep);
criterion_main!(benches);
