// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_wireframe::{CpuSurface, PointerEvent, WindowNode, Wireframe, WireframeConfig};

fn gen_rows(rows: u32, cols: u32) -> WindowNode<u32> {
    let mut root = WindowNode::new(0, 0.0, 0.0, f64::from(cols) * 40.0, f64::from(rows) * 24.0);
    let mut id = 1;
    for r in 0..rows {
        let mut row = WindowNode::new(id, 0.0, f64::from(r) * 24.0, f64::from(cols) * 40.0, 24.0);
        id += 1;
        for c in 0..cols {
            row.push_child(WindowNode::new(id, f64::from(c) * 40.0 + 2.0, 2.0, 36.0, 20.0));
            id += 1;
        }
        root.push_child(row);
    }
    root
}

fn engine() -> Wireframe<u32, CpuSurface> {
    let mut wf = Wireframe::new(WireframeConfig::default());
    wf.set_viewport(Size::new(800.0, 600.0), 2.0);
    wf.set_hierarchy(&[gen_rows(40, 20)]);
    wf.attach_base(CpuSurface::new(0, 0));
    wf.attach_overlay(CpuSurface::new(0, 0));
    wf
}

fn bench_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("wireframe_cpu");

    let mut wf = engine();
    let mut x = 0.0;
    group.bench_function("hover_overlay_only", |b| {
        b.iter(|| {
            x = (x + 7.0) % 800.0;
            black_box(wf.handle_pointer(PointerEvent::Move(Point::new(x, 300.0))));
        });
    });

    let mut wf = engine();
    wf.handle_pointer(PointerEvent::Down(Point::new(400.0, 300.0)));
    let mut dx = 0.0;
    group.bench_function("drag_full_redraw", |b| {
        b.iter(|| {
            dx = (dx + 1.0) % 50.0;
            black_box(wf.handle_pointer(PointerEvent::Move(Point::new(400.0 + dx, 300.0))));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pointer);
criterion_main!(benches);
