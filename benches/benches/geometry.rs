// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Vec2};
use understory_wireframe_geometry::{WindowNode, compute_bounds, hit_test};

/// A `fanout`-ary tree `depth` levels deep; children tile their parent's row.
fn gen_tree(fanout: usize, depth: usize, next_id: &mut u32, width: f64, height: f64) -> WindowNode<u32> {
    let id = *next_id;
    *next_id += 1;
    let mut node = WindowNode::new(id, 0.0, 0.0, width, height);
    if depth > 0 {
        let w = width / fanout as f64;
        for i in 0..fanout {
            let mut child = gen_tree(fanout, depth - 1, next_id, w, height * 0.8);
            child.x = i as f64 * w;
            child.y = height * 0.1;
            node.push_child(child);
        }
    }
    node
}

/// xorshift64, enough to scatter query points.
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn bench_compute_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_bounds");
    for &(fanout, depth) in &[(4_usize, 4_usize), (4, 6), (8, 4)] {
        let mut next_id = 0;
        let root = gen_tree(fanout, depth, &mut next_id, 1920.0, 1080.0);
        group.throughput(Throughput::Elements(u64::from(next_id)));
        group.bench_function(format!("fanout{fanout}_depth{depth}"), |b| {
            b.iter(|| {
                let dims = compute_bounds(black_box(core::slice::from_ref(&root)));
                black_box(dims.nodes.len());
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let transform = Affine::translate(Vec2::new(20.0, 20.0)) * Affine::scale(0.5);
    for &(fanout, depth) in &[(4_usize, 4_usize), (4, 6), (8, 4)] {
        let mut next_id = 0;
        let root = gen_tree(fanout, depth, &mut next_id, 1920.0, 1080.0);
        let dims = compute_bounds(core::slice::from_ref(&root));
        let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
        let points: Vec<Point> = (0..256)
            .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 580.0))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("fanout{fanout}_depth{depth}"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &pt in &points {
                    if hit_test(&dims.nodes, black_box(pt), transform, 2.0).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_bounds, bench_hit_test);
criterion_main!(benches);
