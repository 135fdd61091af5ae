// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: the hierarchy input trait, a plain owned node, and the flattened output.

use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::{Rect, Size};

/// A node of an externally supplied view hierarchy.
///
/// The hierarchy is owned by the caller and is read-only to this crate. Each
/// node exposes a stable identity, a rectangle relative to its parent, and
/// its ordered children.
///
/// ## Coordinates
///
/// [`local_rect`](Self::local_rect) is expressed relative to the parent's
/// absolute origin: a child at `(10, 5)` under a parent whose absolute
/// rectangle starts at `(100, 100)` ends up at `(110, 105)`. Width and height
/// are expected to be non-negative; this is a caller contract and is not
/// validated.
pub trait HierarchyNode: Sized {
    /// Stable identity used to key derived data (for example a lookup map
    /// from node to computed rectangle).
    type Id: Copy + Eq + Hash;

    /// Returns the identity of this node.
    fn id(&self) -> Self::Id;

    /// Returns the rectangle of this node relative to its parent's origin.
    fn local_rect(&self) -> Rect;

    /// Returns the ordered children of this node.
    fn children(&self) -> &[Self];
}

/// A plain owned hierarchy node.
///
/// This mirrors the shape of a typical view hierarchy dump (one "window" per
/// node, with optional position and size) and is the simplest way to feed a
/// tree into [`compute_bounds`](crate::compute_bounds).
///
/// ```
/// use understory_wireframe_geometry::{WindowNode, compute_bounds};
///
/// let root = WindowNode::new(0_u32, 0.0, 0.0, 100.0, 100.0)
///     .with_child(WindowNode::new(1, 10.0, 10.0, 20.0, 20.0));
/// let dims = compute_bounds(&[root]);
/// assert_eq!(dims.nodes.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WindowNode<K> {
    /// Identity of the node.
    pub id: K,
    /// Horizontal offset from the parent's origin.
    pub x: f64,
    /// Vertical offset from the parent's origin.
    pub y: f64,
    /// Width of the node.
    pub width: f64,
    /// Height of the node.
    pub height: f64,
    /// Ordered children.
    pub children: Vec<Self>,
}

impl<K> WindowNode<K> {
    /// Creates a childless node.
    pub fn new(id: K, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            children: Vec::new(),
        }
    }

    /// Creates a childless node at the parent's origin with no size.
    ///
    /// Dumps frequently omit geometry for container windows; those default to zero.
    pub fn empty(id: K) -> Self {
        Self::new(id, 0.0, 0.0, 0.0, 0.0)
    }

    /// Appends a child and returns `self`, for building trees inline.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl<K: Copy + Eq + Hash> HierarchyNode for WindowNode<K> {
    type Id = K;

    fn id(&self) -> K {
        self.id
    }

    fn local_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// A hierarchy node paired with its rectangle in absolute model space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewNode<K> {
    /// Identity of the source node.
    pub node: K,
    /// Absolute rectangle, accumulated from the root.
    pub rect: Rect,
}

/// Flattened hierarchy plus the extent of its content.
///
/// Produced by [`compute_bounds`](crate::compute_bounds).
///
/// Invariants:
/// - `nodes` is in depth-first order with every parent before its children.
/// - `max_width`/`max_height` are at least every node's `x1`/`y1`, and never
///   negative (the extent is rooted at the model origin).
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyDimensions<K> {
    /// Flattened nodes in depth-first, parent-before-child order.
    pub nodes: Vec<ViewNode<K>>,
    /// Right edge of the content extent.
    pub max_width: f64,
    /// Bottom edge of the content extent.
    pub max_height: f64,
}

impl<K> HierarchyDimensions<K> {
    /// Returns the content extent as a size rooted at the origin.
    pub fn size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Returns `true` if the hierarchy had no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K> Default for HierarchyDimensions<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            max_width: 0.0,
            max_height: 0.0,
        }
    }
}
