// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_hex_grid::{Child, HexGrid, HexGridConfig, SizeHint};

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for side in [200_u32, 1_000, 10_000] {
        group.bench_function(format!("radius24_{side}"), |b| {
            let mut grid = HexGrid::new(HexGridConfig::new(24));
            b.iter(|| {
                let m = grid.measure(SizeHint::Exact(black_box(side)), SizeHint::Exact(side));
                black_box(m.capacity);
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for (radius, side) in [(24_u32, 1_000_u32), (8, 2_000), (4, 4_000)] {
        let mut grid = HexGrid::new(HexGridConfig::new(radius));
        let capacity = grid
            .measure(SizeHint::Exact(side), SizeHint::Exact(side))
            .capacity;
        group.throughput(Throughput::Elements(capacity as u64));
        group.bench_function(format!("r{radius}_{side}_full"), |b| {
            b.iter(|| {
                let placed = grid.layout((0..capacity).map(Child::visible));
                black_box(placed.len());
            });
        });
        group.bench_function(format!("r{radius}_{side}_half_hidden"), |b| {
            b.iter(|| {
                let children = (0..capacity).map(|i| {
                    if i % 2 == 0 {
                        Child::visible(i)
                    } else {
                        Child::hidden(i)
                    }
                });
                black_box(grid.layout(children).len());
            });
        });
    }
    group.finish();
}

fn bench_slot_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("slots");
    let mut grid = HexGrid::new(HexGridConfig::new(6).with_start_indented(true));
    let _ = grid.measure(SizeHint::Exact(3_000), SizeHint::Exact(3_000));
    let Some(metrics) = grid.metrics().copied() else {
        return;
    };
    group.throughput(Throughput::Elements(metrics.capacity() as u64));
    group.bench_function("walk_r6_3000", |b| {
        b.iter(|| black_box(metrics.slots().map(|s| s.x + s.y).sum::<i64>()));
    });
    group.finish();
}

criterion_group!(benches, bench_measure, bench_layout, bench_slot_walk);
criterion_main!(benches);
