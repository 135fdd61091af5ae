// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster surface abstraction and a recording implementation.

use alloc::vec::Vec;

use kurbo::{Affine, Rect};
use peniko::Color;

/// A 2D raster target with a current transform, modeled on a canvas context.
///
/// Rectangles passed to [`fill_rect`](Self::fill_rect) and
/// [`stroke_rect`](Self::stroke_rect) are mapped through the current
/// transform. After [`reset_transform`](Self::reset_transform) they are in
/// device pixels.
///
/// A frame is `clear`, draws, then [`present`](Self::present).
pub trait Surface {
    /// Resizes the backing store to `width × height` device pixels.
    ///
    /// Contents after a resize are unspecified until the next clear.
    fn resize(&mut self, width: u32, height: u32);

    /// Restores the identity transform.
    fn reset_transform(&mut self);

    /// Makes every pixel fully transparent, independent of the transform.
    fn clear(&mut self);

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect`, centered on its edges, `width` units wide.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Finishes the frame drawn since the last clear.
    ///
    /// Immediate-mode surfaces have nothing to do here.
    fn present(&mut self) {}
}

/// A single call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::resize`].
    Resize {
        /// Width in device pixels.
        width: u32,
        /// Height in device pixels.
        height: u32,
    },
    /// [`Surface::reset_transform`].
    ResetTransform,
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::set_transform`].
    SetTransform(Affine),
    /// [`Surface::fill_rect`].
    FillRect {
        /// Rectangle in current transform space.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_rect`].
    StrokeRect {
        /// Rectangle in current transform space.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`Surface::present`].
    Present,
}

/// Surface that records calls instead of rasterizing.
///
/// Intended for tests that assert on draw order and the transform in effect.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forgets recorded operations but keeps the size.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Size from the last resize, in device pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rectangles filled since the last reset of the transform, in call order.
    ///
    /// This is what is visible after the most recent full redraw.
    pub fn last_frame_fills(&self) -> Vec<(Rect, Color)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::ResetTransform))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::Resize { width, height });
    }

    fn reset_transform(&mut self) {
        self.ops.push(SurfaceOp::ResetTransform);
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn set_transform(&mut self, transform: Affine) {
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeRect { rect, color, width });
    }

    fn present(&mut self) {
        self.ops.push(SurfaceOp::Present);
    }
}
