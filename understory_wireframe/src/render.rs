// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual-surface renderer: a base surface for the wireframe and an overlay for highlights.

use bitflags::bitflags;
use kurbo::{Affine, Rect};
use tracing::{debug, trace};
use understory_wireframe_geometry::ViewNode;

use crate::config::WireframeStyle;
use crate::surface::Surface;

bitflags! {
    /// Which surfaces an input change invalidated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Redraw: u8 {
        /// The wireframe itself: tree, transform, or surface size changed.
        const BASE    = 0b0000_0001;
        /// Selection or hover highlights changed.
        const OVERLAY = 0b0000_0010;
    }
}

/// Owns the two stacked surfaces and draws into them.
///
/// Both surfaces share one size. Until both are attached every draw is a
/// no-op, so the renderer can be created before the host has surfaces to
/// give it.
#[derive(Debug)]
pub struct Renderer<S> {
    base: Option<S>,
    overlay: Option<S>,
    width: u32,
    height: u32,
    style: WireframeStyle,
}

impl<S: Surface> Renderer<S> {
    /// Creates a renderer with no surfaces and a zero size.
    pub fn new(style: WireframeStyle) -> Self {
        Self {
            base: None,
            overlay: None,
            width: 0,
            height: 0,
            style,
        }
    }

    /// Paint in use.
    pub fn style(&self) -> &WireframeStyle {
        &self.style
    }

    /// Installs the base surface, resized to the current size. Returns the previous one.
    pub fn attach_base(&mut self, mut surface: S) -> Option<S> {
        surface.resize(self.width, self.height);
        debug!(width = self.width, height = self.height, "attached base surface");
        self.base.replace(surface)
    }

    /// Installs the overlay surface, resized to the current size. Returns the previous one.
    pub fn attach_overlay(&mut self, mut surface: S) -> Option<S> {
        surface.resize(self.width, self.height);
        debug!(width = self.width, height = self.height, "attached overlay surface");
        self.overlay.replace(surface)
    }

    /// Removes and returns both surfaces as `(base, overlay)`.
    pub fn detach(&mut self) -> (Option<S>, Option<S>) {
        debug!("detached wireframe surfaces");
        (self.base.take(), self.overlay.take())
    }

    /// Returns `true` once both surfaces are attached.
    pub fn is_ready(&self) -> bool {
        self.base.is_some() && self.overlay.is_some()
    }

    /// The base surface, if attached.
    pub fn base(&self) -> Option<&S> {
        self.base.as_ref()
    }

    /// The overlay surface, if attached.
    pub fn overlay(&self) -> Option<&S> {
        self.overlay.as_ref()
    }

    /// Current surface size in device pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resizes both surfaces (attached or not later) to `width × height` device pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        for surface in [self.base.as_mut(), self.overlay.as_mut()].into_iter().flatten() {
            surface.resize(width, height);
        }
    }

    /// Clears the base surface and draws every node through `transform`.
    ///
    /// Nodes are drawn in slice order, so parents (which precede their
    /// children in depth-first order) are covered by their children while
    /// each child's border stays visible.
    pub fn draw_base<K>(&mut self, transform: Affine, nodes: &[ViewNode<K>]) {
        if !self.is_ready() {
            return;
        }
        let style = self.style;
        let Some(base) = self.base.as_mut() else {
            return;
        };
        prepare(base, transform);
        for node in nodes {
            base.fill_rect(node.rect, style.node_fill);
            base.stroke_rect(node.rect, style.node_stroke, style.stroke_width);
        }
        base.present();
        trace!(nodes = nodes.len(), "drew wireframe base");
    }

    /// Clears the overlay and draws the highlights through `transform`.
    ///
    /// The selection is drawn first so a hover over the same node lands on top.
    pub fn draw_overlay(&mut self, transform: Affine, selected: Option<Rect>, hovered: Option<Rect>) {
        if !self.is_ready() {
            return;
        }
        let style = self.style;
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        prepare(overlay, transform);
        if let Some(rect) = selected {
            overlay.fill_rect(rect, style.selected_fill);
        }
        if let Some(rect) = hovered {
            overlay.fill_rect(rect, style.hover_fill);
        }
        overlay.present();
    }
}

/// Drops whatever the surface showed under its previous transform and installs `transform`.
fn prepare<S: Surface>(surface: &mut S, transform: Affine) {
    surface.reset_transform();
    surface.clear();
    surface.set_transform(transform);
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "vello_cpu")]
    use crate::cpu::CpuSurface;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Vec2;

    fn ready() -> Renderer<RecordingSurface> {
        let mut r = Renderer::new(WireframeStyle::default());
        r.resize(100, 80);
        r.attach_base(RecordingSurface::new());
        r.attach_overlay(RecordingSurface::new());
        r
    }

    fn nodes() -> Vec<ViewNode<u32>> {
        vec![
            ViewNode {
                node: 1,
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
            },
            ViewNode {
                node: 2,
                rect: Rect::new(10.0, 10.0, 20.0, 20.0),
            },
        ]
    }

    #[test]
    fn missing_surface_is_a_noop() {
        let mut r: Renderer<RecordingSurface> = Renderer::new(WireframeStyle::default());
        r.attach_base(RecordingSurface::new());
        r.draw_base(Affine::IDENTITY, &nodes());
        r.draw_overlay(Affine::IDENTITY, Some(Rect::new(0.0, 0.0, 1.0, 1.0)), None);
        let ops = r.base().unwrap().ops();
        assert_eq!(ops, &[SurfaceOp::Resize { width: 0, height: 0 }]);
        assert!(!r.is_ready());
    }

    #[test]
    fn base_resets_clears_then_transforms() {
        let mut r = ready();
        let tf = Affine::translate(Vec2::new(3.0, 4.0)) * Affine::scale(2.0);
        r.draw_base(tf, &nodes());
        let ops = r.base().unwrap().ops();
        let style = WireframeStyle::default();
        assert_eq!(
            &ops[1..],
            &[
                SurfaceOp::ResetTransform,
                SurfaceOp::Clear,
                SurfaceOp::SetTransform(tf),
                SurfaceOp::FillRect {
                    rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                    color: style.node_fill,
                },
                SurfaceOp::StrokeRect {
                    rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                    color: style.node_stroke,
                    width: style.stroke_width,
                },
                SurfaceOp::FillRect {
                    rect: Rect::new(10.0, 10.0, 20.0, 20.0),
                    color: style.node_fill,
                },
                SurfaceOp::StrokeRect {
                    rect: Rect::new(10.0, 10.0, 20.0, 20.0),
                    color: style.node_stroke,
                    width: style.stroke_width,
                },
                SurfaceOp::Present,
            ]
        );
        assert!(r.overlay().unwrap().last_frame_fills().is_empty());
    }

    #[test]
    fn overlay_draws_selection_before_hover() {
        let mut r = ready();
        let sel = Rect::new(0.0, 0.0, 5.0, 5.0);
        let hov = Rect::new(1.0, 1.0, 2.0, 2.0);
        r.draw_overlay(Affine::IDENTITY, Some(sel), Some(hov));
        let style = WireframeStyle::default();
        assert_eq!(
            r.overlay().unwrap().last_frame_fills(),
            vec![(sel, style.selected_fill), (hov, style.hover_fill)]
        );
        assert!(r.base().unwrap().last_frame_fills().is_empty());
    }

    #[test]
    fn resize_propagates_to_attached_surfaces() {
        let mut r = ready();
        r.resize(10, 20);
        assert_eq!(r.base().unwrap().size(), (10, 20));
        assert_eq!(r.overlay().unwrap().size(), (10, 20));
        assert_eq!(r.size(), (10, 20));
    }

    #[cfg(feature = "vello_cpu")]
    #[test]
    fn overlay_redraw_is_pixel_identical() {
        let mut r: Renderer<CpuSurface> = Renderer::new(WireframeStyle::default());
        r.resize(64, 64);
        r.attach_base(CpuSurface::new(0, 0));
        r.attach_overlay(CpuSurface::new(0, 0));
        let tf = Affine::translate(Vec2::new(2.0, 2.0)) * Affine::scale(1.5);
        let sel = Some(Rect::new(4.0, 4.0, 30.0, 30.0));
        let hov = Some(Rect::new(10.0, 10.0, 20.0, 20.0));

        r.draw_overlay(tf, sel, hov);
        let first = r.overlay().unwrap().pixels().to_vec();
        r.draw_overlay(tf, sel, hov);
        assert_eq!(first, r.overlay().unwrap().pixels());
        assert!(first.iter().any(|p| p[3] != 0));
    }

    #[cfg(feature = "vello_cpu")]
    #[test]
    fn stale_pixels_do_not_survive_a_transform_change() {
        let mut r: Renderer<CpuSurface> = Renderer::new(WireframeStyle::default());
        r.resize(40, 40);
        r.attach_base(CpuSurface::new(0, 0));
        r.attach_overlay(CpuSurface::new(0, 0));
        let nodes = nodes();
        r.draw_base(Affine::translate(Vec2::new(20.0, 20.0)) * Affine::scale(0.2), &nodes);
        r.draw_base(Affine::scale(0.2), &nodes);
        let base = r.base().unwrap();
        assert_eq!(base.pixel(25, 25), Some([0; 4]));
        assert!(base.pixel(5, 5).is_some_and(|p| p[3] == 255));
    }
}
