// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wireframe engine: hierarchy in, pixels and selection events out.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Rect, Size};
use tracing::{debug, trace};
use understory_wireframe_geometry::{
    HierarchyDimensions, HierarchyNode, ViewNode, compute_bounds, hit_test,
};

use crate::config::WireframeConfig;
use crate::gesture::{Cursor, GestureAction, PanGesture, PointerEvent};
use crate::render::{Redraw, Renderer};
use crate::surface::Surface;
use crate::transform::TransformState;

/// Notification produced by [`Wireframe::handle_pointer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WireframeEvent<K> {
    /// The user clicked this node. Selection itself stays with the host,
    /// which is expected to feed it back through [`Wireframe::set_selected`].
    NodeSelected(K),
    /// The cursor over the overlay should change.
    CursorChanged(Cursor),
}

/// Pan-and-select wireframe over a view hierarchy.
///
/// Inputs flow in through setters and [`handle_pointer`](Self::handle_pointer);
/// the only outputs are pixels on the two surfaces and the returned
/// [`WireframeEvent`]s.
///
/// Derived data is rebuilt wholesale whenever its inputs change:
/// - The flattened hierarchy and node lookup on [`set_hierarchy`](Self::set_hierarchy).
/// - The committed transform when the viewport or the content extent changes.
///
/// Every operation is a no-op on the surfaces until both are attached.
#[derive(Debug)]
pub struct Wireframe<K, S> {
    config: WireframeConfig,
    dimensions: HierarchyDimensions<K>,
    lookup: HashMap<K, usize>,
    viewport: Size,
    device_pixel_ratio: f64,
    transform: TransformState,
    renderer: Renderer<S>,
    gesture: PanGesture,
    cursor: Cursor,
    selected: Option<K>,
    hovered: Option<K>,
}

impl<K, S> Wireframe<K, S>
where
    K: Copy + Eq + Hash,
    S: Surface,
{
    /// Creates an engine with an empty hierarchy, zero viewport, and no surfaces.
    pub fn new(config: WireframeConfig) -> Self {
        Self {
            config,
            dimensions: HierarchyDimensions::default(),
            lookup: HashMap::new(),
            viewport: Size::ZERO,
            device_pixel_ratio: 1.0,
            transform: TransformState::new(),
            renderer: Renderer::new(config.style),
            gesture: PanGesture::new(),
            cursor: Cursor::default(),
            selected: None,
            hovered: None,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &WireframeConfig {
        &self.config
    }

    /// Installs the base (wireframe) surface, returning the one it replaces.
    ///
    /// Any in-flight gesture is abandoned. Once both surfaces are present
    /// everything is redrawn.
    pub fn attach_base(&mut self, surface: S) -> Option<S> {
        self.abandon_gesture();
        let previous = self.renderer.attach_base(surface);
        self.redraw(Redraw::all());
        previous
    }

    /// Installs the overlay (highlight) surface, returning the one it replaces.
    ///
    /// Any in-flight gesture is abandoned. Once both surfaces are present
    /// everything is redrawn.
    pub fn attach_overlay(&mut self, surface: S) -> Option<S> {
        self.abandon_gesture();
        let previous = self.renderer.attach_overlay(surface);
        self.redraw(Redraw::all());
        previous
    }

    /// Removes both surfaces as `(base, overlay)` and abandons any in-flight gesture.
    pub fn detach_surfaces(&mut self) -> (Option<S>, Option<S>) {
        self.abandon_gesture();
        self.renderer.detach()
    }

    /// Returns `true` once both surfaces are attached.
    pub fn is_active(&self) -> bool {
        self.renderer.is_ready()
    }

    /// Replaces the hierarchy.
    ///
    /// The committed transform is refit only if the content extent changed;
    /// a new tree with the same extent keeps the current pan.
    pub fn set_hierarchy<N>(&mut self, roots: &[N])
    where
        N: HierarchyNode<Id = K>,
    {
        let dimensions = compute_bounds(roots);
        let refit = dimensions.size() != self.dimensions.size();
        self.lookup = dimensions
            .nodes
            .iter()
            .enumerate()
            .map(|(i, v)| (v.node, i))
            .collect();
        self.dimensions = dimensions;
        self.hovered = None;
        debug!(
            nodes = self.dimensions.nodes.len(),
            max_width = self.dimensions.max_width,
            max_height = self.dimensions.max_height,
            refit,
            "set wireframe hierarchy"
        );
        if refit {
            self.refit();
        }
        self.redraw(Redraw::all());
    }

    /// Updates the viewport size (device-independent units) and device pixel ratio.
    ///
    /// Both surfaces are resized to the viewport in device pixels, the
    /// transform is refit (discarding any pan), and everything is redrawn.
    pub fn set_viewport(&mut self, size: Size, device_pixel_ratio: f64) {
        if self.viewport == size && self.device_pixel_ratio == device_pixel_ratio {
            return;
        }
        self.viewport = size;
        self.device_pixel_ratio = device_pixel_ratio;
        let (width, height) = pixel_size(self.surface_size());
        self.renderer.resize(width, height);
        self.refit();
        self.redraw(Redraw::all());
    }

    /// Updates the host-owned selection and redraws the overlay.
    pub fn set_selected(&mut self, selected: Option<K>) {
        self.selected = selected;
        self.redraw(Redraw::OVERLAY);
    }

    /// Feeds one pointer event from the overlay surface.
    ///
    /// Returns the notifications the host should act on, in order.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<WireframeEvent<K>> {
        let mut events = Vec::new();
        if !self.is_active() {
            return events;
        }
        match self.gesture.handle(event) {
            GestureAction::Arm => {
                self.transform.abandon();
                self.set_cursor(Cursor::Grabbing, &mut events);
            }
            GestureAction::Hover(pos) => {
                let hovered = self.node_at(pos);
                if hovered != self.hovered {
                    trace!(hit = hovered.is_some(), "wireframe hover changed");
                }
                self.hovered = hovered;
                self.redraw(Redraw::OVERLAY);
            }
            GestureAction::Pan(offset) => {
                self.hovered = None;
                self.transform.drag_by(offset, self.device_pixel_ratio);
                self.redraw(Redraw::all());
            }
            GestureAction::Release { commit } => {
                if commit && self.transform.commit() {
                    debug!(transform = ?self.transform.committed(), "committed wireframe pan");
                }
                self.set_cursor(Cursor::Grab, &mut events);
            }
            GestureAction::Select(pos) => {
                let committed = self.transform.committed();
                if let Some(hit) = hit_test(
                    &self.dimensions.nodes,
                    pos,
                    committed,
                    self.device_pixel_ratio,
                ) {
                    let (node, rect) = (hit.node, hit.rect);
                    debug!(?rect, "wireframe node selected");
                    self.hovered = None;
                    self.renderer.draw_overlay(committed, Some(rect), None);
                    events.push(WireframeEvent::NodeSelected(node));
                }
            }
            GestureAction::Ignore => {}
        }
        events
    }

    /// The node under `point` (device-independent units) against the committed transform.
    pub fn node_at(&self, point: Point) -> Option<K> {
        hit_test(
            &self.dimensions.nodes,
            point,
            self.transform.committed(),
            self.device_pixel_ratio,
        )
        .map(|v| v.node)
    }

    /// The computed absolute rectangle for `node`, if it is in the hierarchy.
    pub fn view_node(&self, node: K) -> Option<&ViewNode<K>> {
        self.lookup
            .get(&node)
            .and_then(|&i| self.dimensions.nodes.get(i))
    }

    /// Flattened hierarchy and content extent.
    pub fn dimensions(&self) -> &HierarchyDimensions<K> {
        &self.dimensions
    }

    /// Transform currently on screen: the in-flight pan if dragging, else the committed one.
    pub fn transform(&self) -> Affine {
        self.transform.current()
    }

    /// Last committed transform; hit testing always uses this one.
    pub fn committed_transform(&self) -> Affine {
        self.transform.committed()
    }

    /// Uniform fit scale of the current layout.
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Viewport size in device-independent units.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Device pixel ratio.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Host-provided selection.
    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    /// Node currently highlighted by hover.
    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// Cursor the host should show over the overlay.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns `true` while a pan is in flight.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The base surface, if attached.
    pub fn base_surface(&self) -> Option<&S> {
        self.renderer.base()
    }

    /// The overlay surface, if attached.
    pub fn overlay_surface(&self) -> Option<&S> {
        self.renderer.overlay()
    }

    fn surface_size(&self) -> Size {
        Size::new(
            self.viewport.width * self.device_pixel_ratio,
            self.viewport.height * self.device_pixel_ratio,
        )
        .ceil()
    }

    fn refit(&mut self) {
        self.transform.reset(
            self.surface_size(),
            self.dimensions.size(),
            self.config.margin,
        );
    }

    fn abandon_gesture(&mut self) {
        self.gesture.reset();
        self.transform.abandon();
        self.hovered = None;
        self.cursor = Cursor::Grab;
    }

    fn set_cursor(&mut self, cursor: Cursor, events: &mut Vec<WireframeEvent<K>>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            events.push(WireframeEvent::CursorChanged(cursor));
        }
    }

    fn rect_of(&self, node: Option<K>) -> Option<Rect> {
        node.and_then(|n| self.view_node(n)).map(|v| v.rect)
    }

    fn redraw(&mut self, what: Redraw) {
        let transform = self.transform.current();
        if what.contains(Redraw::BASE) {
            self.renderer.draw_base(transform, &self.dimensions.nodes);
        }
        if what.contains(Redraw::OVERLAY) {
            let selected = self.rect_of(self.selected);
            let hovered = self.rect_of(self.hovered);
            self.renderer.draw_overlay(transform, selected, hovered);
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Surface sizes are whole, non-negative pixel counts well inside u32."
)]
fn pixel_size(size: Size) -> (u32, u32) {
    (size.width.max(0.0) as u32, size.height.max(0.0) as u32)
}
