// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit-to-viewport scale.

use kurbo::{Size, Vec2};

/// Returns the largest uniform scale that fits `content` inside `viewport` with `margin` on every side.
///
/// `margin.x` is applied to the left and right edges, `margin.y` to the top
/// and bottom. The result is clamped to be non-negative, so a viewport smaller
/// than its margins yields `0.0`; callers building an invertible transform
/// must treat that as degenerate.
///
/// Zero-width or zero-height content returns `1.0` rather than dividing by zero.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_wireframe_geometry::calculate_fit_scale;
///
/// let s = calculate_fit_scale(
///     Size::new(800.0, 600.0),
///     Size::new(400.0, 300.0),
///     Vec2::new(20.0, 20.0),
/// );
/// assert!((s - 560.0 / 300.0).abs() < 1e-12);
/// ```
pub fn calculate_fit_scale(viewport: Size, content: Size, margin: Vec2) -> f64 {
    if content.width == 0.0 || content.height == 0.0 {
        return 1.0;
    }
    let sx = (viewport.width - 2.0 * margin.x) / content.width;
    let sy = (viewport.height - 2.0 * margin.y) / content.height;
    sx.min(sy).max(0.0)
}
