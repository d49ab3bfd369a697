// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lineage_layout::{Ahnentafel, Person, PxSize, TreeLayoutConfig, layout_uniform};

/// A complete tree of `levels` generations, numbered `1..2^levels`.
fn complete_tree(levels: u32) -> Vec<Person> {
    (1..(1_u32 << levels))
        .filter_map(Ahnentafel::new)
        .map(|n| Person::new(format!("Person {n}"), n))
        .collect()
}

/// The subject and `levels - 1` generations of fathers: 1, 2, 4, 8, ...
fn paternal_line(levels: u32) -> Vec<Person> {
    let mut people = Vec::new();
    let mut n = Ahnentafel::ROOT;
    for _ in 0..levels {
        people.push(Person::new(format!("Person {n}"), n));
        match n.father() {
            Some(father) => n = father,
            None => break,
        }
    }
    people
}

fn bench_complete_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/complete");
    let size = PxSize::new(48, 58);
    let config = TreeLayoutConfig::default();

    for levels in [4_u32, 8, 12, 16] {
        let people = complete_tree(levels);
        group.throughput(Throughput::Elements(people.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &people, |b, people| {
            b.iter(|| {
                let layout = layout_uniform(black_box(people), size, &config).unwrap();
                black_box(layout);
            });
        });
    }

    group.finish();
}

fn bench_sparse_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/paternal_line");
    let size = PxSize::new(48, 58);
    let config = TreeLayoutConfig::default();

    // Few nodes on a wide canvas: cost should track node count, not canvas size.
    for levels in [8_u32, 16, 24] {
        let people = paternal_line(levels);
        group.throughput(Throughput::Elements(people.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &people, |b, people| {
            b.iter(|| {
                let layout = layout_uniform(black_box(people), size, &config).unwrap();
                black_box(layout);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_complete_trees, bench_sparse_trees);
criterion_main!(benches);
