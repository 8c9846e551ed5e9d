// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_geometry::{Circle, CircleId, Frame, FrameId};
use corral_registry::Registry;
use corral_rules::{CircleDraft, validate_circle};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

/// Centers of an `n` x `n` grid of touching circles with diameter `d`.
fn grid_centers(n: usize, d: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new((x as f64 + 0.5) * d, (y as f64 + 0.5) * d));
        }
    }
    out
}

fn bench_validate_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_circle");
    for &n in &[16usize, 64, 256] {
        let d = 10.0;
        let side = n as f64 * d;
        let frame = Frame::new(
            FrameId::new(0, 1),
            Point::new(side / 2.0, side / 2.0),
            Size::new(side, side),
        )
        .unwrap();
        let siblings: Vec<Circle> = grid_centers(n, d)
            .into_iter()
            .enumerate()
            .map(|(i, p)| Circle::new(CircleId::new(i as u32, 1), frame.id(), p, d).unwrap())
            .collect();
        // Resubmitting the last circle in place scans every sibling and passes.
        let last = siblings[siblings.len() - 1];
        let draft = CircleDraft::from_circle(&last);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("full_scan_n{n}"), |b| {
            b.iter(|| black_box(validate_circle(&draft, &frame, &siblings).is_ok()));
        });
    }
    group.finish();
}

fn bench_registry_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_fill");
    for &n in &[16usize, 32, 64] {
        let d = 10.0;
        let side = n as f64 * d;
        let drafts: Vec<CircleDraft> = grid_centers(n, d)
            .into_iter()
            .map(|p| CircleDraft::new(p, d))
            .collect();
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("add_circles_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut reg = Registry::new();
                    let f = reg
                        .create_frame(Point::new(side / 2.0, side / 2.0), Size::new(side, side))
                        .unwrap();
                    (reg, f)
                },
                |(mut reg, f)| {
                    let outcome = reg.add_circles(f, &drafts).unwrap();
                    black_box(outcome.created.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate_circle, bench_registry_fill);
criterion_main!(benches);
