// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_geometry::{Circle, CircleId, Frame, FrameId};
use corral_rules::{RadiusQuery, calculate};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

const FRAME_SIDE: f64 = 10_000.0;

fn frame() -> Frame {
    Frame::new(
        FrameId::new(0, 1),
        Point::new(FRAME_SIDE / 2.0, FRAME_SIDE / 2.0),
        Size::new(FRAME_SIDE, FRAME_SIDE),
    )
    .unwrap()
}

/// An `n` x `n` grid of touching circles filling the frame.
fn gen_grid_circles(frame: &Frame, n: usize) -> Vec<Circle> {
    let d = FRAME_SIDE / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = CircleId::new((y * n + x) as u32, 1);
            let center = Point::new((x as f64 + 0.5) * d, (y as f64 + 0.5) * d);
            out.push(Circle::new(id, frame.id(), center, d).unwrap());
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Small circles scattered at random; overlap is irrelevant for read queries.
fn gen_random_circles(frame: &Frame, count: usize, diameter: f64) -> Vec<Circle> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let span = FRAME_SIDE - diameter;
    (0..count)
        .map(|i| {
            let center = Point::new(
                diameter / 2.0 + rng.next_f64() * span,
                diameter / 2.0 + rng.next_f64() * span,
            );
            Circle::new(CircleId::new(i as u32, 1), frame.id(), center, diameter).unwrap()
        })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let frame = frame();
    let mut group = c.benchmark_group("metrics");
    for &n in &[16usize, 64, 256] {
        // Every row ties, so the groups are as large as they get.
        let circles = gen_grid_circles(&frame, n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| {
                let m = calculate(&frame, &circles);
                black_box(m.extremes.map(|e| e.highest.len()));
            });
        });
    }
    for &count in &[1_000usize, 10_000, 100_000] {
        let circles = gen_random_circles(&frame, count, 8.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{count}"), |b| {
            b.iter(|| black_box(calculate(&frame, &circles).total_circles));
        });
    }
    group.finish();
}

fn bench_radius_search(c: &mut Criterion) {
    let frame = frame();
    let mut group = c.benchmark_group("radius_search");
    for &count in &[1_000usize, 10_000, 100_000] {
        let circles = gen_random_circles(&frame, count, 8.0);
        group.throughput(Throughput::Elements(count as u64));
        for &radius in &[100.0, 2_500.0] {
            let query = RadiusQuery::new(FRAME_SIDE / 2.0, FRAME_SIDE / 2.0, radius).unwrap();
            group.bench_function(format!("random_{count}_r{radius}"), |b| {
                b.iter(|| black_box(query.filter(&circles).len()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_metrics, bench_radius_search);
criterion_main!(benches);
