// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use lineage_layout::{Ahnentafel, Person};
use lineage_shell::{ShellConfig, TreeShell};

fn complete_tree(levels: u32) -> Vec<Person> {
    (1..(1_u32 << levels))
        .filter_map(Ahnentafel::new)
        .map(|n| Person::new(format!("Person {n}"), n))
        .collect()
}

fn bench_hit_testing(c: &mut Criterion) {
    let view = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let mut shell = TreeShell::new(complete_tree(10), view, ShellConfig::default()).unwrap();
    shell.on_gesture(1.5, Vec2::new(-120.0, 40.0));

    // A coarse grid across the view; most points miss every card.
    let points: Vec<Point> = (0..32)
        .flat_map(|i| (0..18).map(move |j| Point::new(i as f64 * 40.0, j as f64 * 40.0)))
        .collect();

    c.bench_function("shell/card_at_grid", |b| {
        b.iter(|| {
            let hits = points
                .iter()
                .filter(|&&pt| shell.card_at(black_box(pt)).is_some())
                .count();
            black_box(hits);
        });
    });
}

fn bench_drag(c: &mut Criterion) {
    let view = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let mut shell = TreeShell::new(complete_tree(8), view, ShellConfig::default()).unwrap();

    c.bench_function("shell/drag_100_moves", |b| {
        b.iter(|| {
            let start = view.center();
            shell.pointer_down(1, start);
            for step in 1..=100 {
                shell.pointer_move(1, start + Vec2::new(step as f64, 0.5 * step as f64));
            }
            black_box(shell.pointer_up(1));
        });
    });
}

criterion_group!(benches, bench_hit_testing, bench_drag);
criterion_main!(benches);
