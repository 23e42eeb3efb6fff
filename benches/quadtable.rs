#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};
use quadtable::OpenAddressTable;

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(("[a-zA-Z0-9]{1,16}", any::<i32>()), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut quad_table = OpenAddressTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("quadtable insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                black_box(quad_table.insert(key, value).unwrap());
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                black_box(rust_map.insert(key, value));
            }
        });
    });
    group.bench_function("quadtable find", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(quad_table.find(key));
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(rust_map.get(key));
            }
        });
    });
    group.bench_function("quadtable remove and reinsert", |b| {
        b.iter(|| {
            for (key, value) in &items {
                black_box(quad_table.remove(key));
                black_box(quad_table.insert(key.as_str(), *value).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
