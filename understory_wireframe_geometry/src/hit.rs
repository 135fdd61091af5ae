// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-model mapping and deepest-node hit testing.

use kurbo::{Affine, Point};

use crate::types::ViewNode;

/// Maps a pointer position into model space.
///
/// `point` is in device-independent units (for example a pointer offset within
/// the surface). It is first multiplied by `device_pixel_ratio` to land in the
/// surface's pixel space, then mapped through the inverse of `transform`.
///
/// Returns `None` if `transform` is not invertible.
pub fn to_model_point(point: Point, transform: Affine, device_pixel_ratio: f64) -> Option<Point> {
    let det = transform.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let device = Point::new(point.x * device_pixel_ratio, point.y * device_pixel_ratio);
    Some(transform.inverse() * device)
}

/// Maps a model-space point back to a pointer position.
///
/// This is the inverse of [`to_model_point`].
pub fn to_view_point(model: Point, transform: Affine, device_pixel_ratio: f64) -> Point {
    let device = transform * model;
    Point::new(device.x / device_pixel_ratio, device.y / device_pixel_ratio)
}

/// Returns the most deeply nested node under `point`.
///
/// `point` is mapped into model space with [`to_model_point`]. Among all
/// rectangles containing the mapped point, the one with the smallest area
/// wins. Equal areas resolve to the node that appears later in `nodes`,
/// which for [`compute_bounds`](crate::compute_bounds) output is the deeper
/// (or later sibling) node.
///
/// Containment is half-open (`x0 <= x < x1`), so zero-sized rectangles never match.
///
/// Returns `None` on a miss or when `transform` is not invertible.
pub fn hit_test<K>(
    nodes: &[ViewNode<K>],
    point: Point,
    transform: Affine,
    device_pixel_ratio: f64,
) -> Option<&ViewNode<K>> {
    let model = to_model_point(point, transform, device_pixel_ratio)?;
    let mut best: Option<(&ViewNode<K>, f64)> = None;
    for node in nodes {
        if !node.rect.contains(model) {
            continue;
        }
        let area = node.rect.area();
        match best {
            Some((_, best_area)) if area > best_area => {}
            _ => best = Some((node, area)),
        }
    }
    best.map(|(node, _)| node)
}
