// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model→view transform: fit-and-center base plus an uncommitted pan.
//!
//! ## Lifecycle
//!
//! 1) [`TransformState::reset`] rebuilds the committed transform from the
//!    surface size and content extent. Any pan is discarded.
//! 2) During a drag, [`TransformState::drag_by`] derives a working transform
//!    from the committed one and the total pointer offset of the gesture.
//!    The committed transform is untouched.
//! 3) [`TransformState::commit`] replaces the committed transform with the
//!    working one. [`TransformState::abandon`] drops it instead.
//!
//! Committing is the only way a pan becomes persistent, so a gesture that
//! never completes cannot move the view past the last committed state.

use kurbo::{Affine, Size, Vec2};
use tracing::debug;
use understory_wireframe_geometry::calculate_fit_scale;

/// Builds the base transform that fits `content` into `surface` and centers it.
///
/// Returns the uniform scale alongside the transform. A zero or non-finite
/// fit scale is replaced by `1.0` so the transform is always invertible.
///
/// ```
/// use kurbo::{Affine, Point, Size, Vec2};
/// use understory_wireframe::fit_transform;
///
/// let (scale, tf) = fit_transform(Size::new(800.0, 600.0), Size::new(400.0, 300.0), Vec2::new(20.0, 20.0));
/// let top_left = tf * Point::ORIGIN;
/// let bottom_right = tf * Point::new(400.0, 300.0);
/// // Centered: equal gaps on both sides of each axis.
/// assert!((top_left.x - (800.0 - bottom_right.x)).abs() < 1e-9);
/// assert!((top_left.y - 20.0).abs() < 1e-9);
/// # let _ = scale;
/// ```
pub fn fit_transform(surface: Size, content: Size, margin: Vec2) -> (f64, Affine) {
    let mut scale = calculate_fit_scale(surface, content, margin);
    if scale <= 0.0 || !scale.is_finite() {
        scale = 1.0;
    }
    let center = Vec2::new(
        (surface.width - content.width * scale).abs() / 2.0,
        (surface.height - content.height * scale).abs() / 2.0,
    );
    (scale, Affine::translate(center) * Affine::scale(scale))
}

/// Committed and in-flight model→view transforms.
#[derive(Clone, Debug)]
pub struct TransformState {
    scale: f64,
    committed: Affine,
    working: Option<Affine>,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformState {
    /// Creates an identity transform with a scale of `1.0`.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            committed: Affine::IDENTITY,
            working: None,
        }
    }

    /// Recomputes the committed transform with [`fit_transform`], discarding any pan.
    pub fn reset(&mut self, surface: Size, content: Size, margin: Vec2) {
        let (scale, committed) = fit_transform(surface, content, margin);
        debug!(scale, ?surface, ?content, "reset wireframe transform");
        self.scale = scale;
        self.committed = committed;
        self.working = None;
    }

    /// Uniform scale of the fit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The last committed transform.
    pub fn committed(&self) -> Affine {
        self.committed
    }

    /// The in-flight transform of the current gesture, if any.
    pub fn working(&self) -> Option<Affine> {
        self.working
    }

    /// The transform to render with: the working transform during a gesture,
    /// otherwise the committed one.
    pub fn current(&self) -> Affine {
        self.working.unwrap_or(self.committed)
    }

    /// Derives the working transform for a gesture that has moved the pointer by `offset`.
    ///
    /// `offset` is the total pointer movement since the gesture started, in
    /// device-independent units. It is converted to model units by the device
    /// pixel ratio and the fit scale and applied on top of the committed
    /// transform, so repeated calls within a gesture do not accumulate.
    pub fn drag_by(&mut self, offset: Vec2, device_pixel_ratio: f64) -> Affine {
        let delta = offset * (device_pixel_ratio / self.scale);
        let working = self.committed * Affine::translate(delta);
        self.working = Some(working);
        working
    }

    /// Makes the working transform the committed one.
    ///
    /// Returns `false` if there was nothing to commit.
    pub fn commit(&mut self) -> bool {
        match self.working.take() {
            Some(working) => {
                self.committed = working;
                true
            }
            None => false,
        }
    }

    /// Drops the working transform, reverting to the committed one.
    pub fn abandon(&mut self) {
        self.working = None;
    }
}
