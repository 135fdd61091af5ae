// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless wireframe: drive the engine with pointer events and inspect pixels.
//!
//! Pans the view with a drag, then clicks a node and echoes the selection
//! back, printing what the overlay shows at each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example wireframe_headless`

use kurbo::{Point, Size, Vec2};
use understory_wireframe::geometry::to_view_point;
use understory_wireframe::{
    CpuSurface, PointerEvent, WindowNode, Wireframe, WireframeConfig, WireframeEvent,
};

fn tree() -> WindowNode<u32> {
    WindowNode::new(1, 0.0, 0.0, 320.0, 240.0)
        .with_child(
            WindowNode::new(2, 10.0, 10.0, 300.0, 40.0)
                .with_child(WindowNode::new(3, 8.0, 8.0, 24.0, 24.0)),
        )
        .with_child(WindowNode::new(4, 10.0, 60.0, 300.0, 170.0))
}

fn overlay_alpha(wf: &Wireframe<u32, CpuSurface>, at: Point) -> u8 {
    let overlay = wf.overlay_surface().unwrap();
    let dpr = wf.device_pixel_ratio();
    overlay
        .pixel((at.x * dpr) as u32, (at.y * dpr) as u32)
        .map_or(0, |px| px[3])
}

fn main() {
    let dpr = 2.0;
    let mut wf = Wireframe::new(WireframeConfig::default());
    wf.set_viewport(Size::new(400.0, 300.0), dpr);
    wf.set_hierarchy(&[tree()]);
    wf.attach_base(CpuSurface::new(0, 0));
    wf.attach_overlay(CpuSurface::new(0, 0));

    let base = wf.base_surface().unwrap();
    println!(
        "surfaces: {}x{} px, scale {:.3}",
        base.width(),
        base.height(),
        wf.scale()
    );
    assert_eq!((base.width(), base.height()), (800, 600));

    // Hover over node 3 (the small button) to see the overlay change.
    let button = wf.view_node(3).unwrap().rect.center();
    let view = to_view_point(button, wf.committed_transform(), dpr);
    wf.handle_pointer(PointerEvent::Move(view));
    let alpha = overlay_alpha(&wf, view);
    println!("hovered {:?}, overlay alpha {alpha}", wf.hovered());
    assert_eq!(wf.hovered(), Some(3));
    assert!(alpha > 0);

    // Drag right by 50 units, i.e. 100 device pixels.
    let before = wf.committed_transform().translation();
    let start = Point::new(200.0, 150.0);
    let end = Point::new(250.0, 150.0);
    for event in [
        PointerEvent::Down(start),
        PointerEvent::Move(Point::new(225.0, 150.0)),
        PointerEvent::Move(end),
        PointerEvent::Up(end),
    ] {
        let events = wf.handle_pointer(event);
        println!("{event:?} -> {events:?}");
    }
    let shift = wf.committed_transform().translation() - before;
    println!("committed: {:?}, shifted by {shift:?}", wf.committed_transform());
    assert!((shift - Vec2::new(100.0, 0.0)).hypot() < 1e-9);

    // The click the host delivers after a drag selects nothing.
    let trailing = wf.handle_pointer(PointerEvent::Click(end));
    println!("trailing click -> {trailing:?}");
    assert!(trailing.is_empty());

    // Click the button at its new position and echo the selection back.
    let at = Point::new(view.x + 50.0, view.y);
    let mut events = wf.handle_pointer(PointerEvent::Down(at));
    events.extend(wf.handle_pointer(PointerEvent::Up(at)));
    events.extend(wf.handle_pointer(PointerEvent::Click(at)));
    let selected = events.iter().find_map(|event| match event {
        WireframeEvent::NodeSelected(node) => Some(*node),
        WireframeEvent::CursorChanged(_) => None,
    });
    println!("selected {selected:?}");
    assert_eq!(selected, Some(3));

    wf.set_selected(selected);
    let alpha = overlay_alpha(&wf, at);
    println!("overlay alpha at selection: {alpha}");
    assert_eq!(wf.selected(), Some(3));
    assert!(alpha > 0);
}
