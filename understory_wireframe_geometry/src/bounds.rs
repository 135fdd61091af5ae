// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening a hierarchy into absolute rectangles.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::{HierarchyDimensions, HierarchyNode, ViewNode};

/// Flattens `roots` into absolute model-space rectangles and computes the content extent.
///
/// Each node's local rectangle is offset by its parent's absolute origin. The
/// output is in depth-first order with parents before children, which callers
/// rely on as paint order: children paint over their parents so nested
/// borders stay visible.
///
/// An empty slice yields no nodes and a zero extent.
pub fn compute_bounds<N: HierarchyNode>(roots: &[N]) -> HierarchyDimensions<N::Id> {
    let mut out = HierarchyDimensions::default();
    // Explicit stack so deep hierarchies cannot overflow the call stack.
    let mut stack: Vec<(Point, &N)> = roots.iter().rev().map(|n| (Point::ORIGIN, n)).collect();

    while let Some((parent_origin, node)) = stack.pop() {
        let local = node.local_rect();
        let origin = parent_origin + local.origin().to_vec2();
        let rect = Rect::from_origin_size(origin, local.size());

        out.max_width = out.max_width.max(rect.x1);
        out.max_height = out.max_height.max(rect.y1);
        out.nodes.push(ViewNode {
            node: node.id(),
            rect,
        });

        stack.extend(node.children().iter().rev().map(|c| (origin, c)));
    }

    out
}
