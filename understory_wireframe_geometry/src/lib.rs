// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_wireframe_geometry --heading-base-level=0

//! Understory Wireframe Geometry: pure geometry for view hierarchy wireframes.
//!
//! Given a hierarchy of nested rectangles (each positioned relative to its
//! parent), this crate:
//!
//! - Flattens it into absolute model-space rectangles with [`compute_bounds`],
//!   preserving depth-first, parent-before-child order.
//! - Computes a uniform fit-to-viewport scale with [`calculate_fit_scale`].
//! - Resolves a pointer position to the most deeply nested rectangle under it
//!   with [`hit_test`], accounting for an affine model→view transform and the
//!   device pixel ratio.
//!
//! Every function here is total over well-formed input: degenerate content
//! falls back to a scale of `1.0`, and non-invertible transforms simply miss.
//!
//! It does **not** own the hierarchy, render anything, or track interaction
//! state. See `understory_wireframe` for the stateful engine built on top.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size, Vec2};
//! use understory_wireframe_geometry::{WindowNode, calculate_fit_scale, compute_bounds, hit_test};
//!
//! let root = WindowNode::new("root", 0.0, 0.0, 100.0, 100.0)
//!     .with_child(WindowNode::new("button", 50.0, 50.0, 10.0, 10.0));
//! let dims = compute_bounds(&[root]);
//!
//! let scale = calculate_fit_scale(Size::new(240.0, 240.0), dims.size(), Vec2::new(20.0, 20.0));
//! assert_eq!(scale, 2.0);
//!
//! // The button is at model (55, 55) → view (130, 130) with a 20px offset.
//! let tf = Affine::translate(Vec2::new(20.0, 20.0)) * Affine::scale(scale);
//! let hit = hit_test(&dims.nodes, Point::new(130.0, 130.0), tf, 1.0).unwrap();
//! assert_eq!(hit.node, "button");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod fit;
mod hit;
mod types;

pub use bounds::compute_bounds;
pub use fit::calculate_fit_scale;
pub use hit::{hit_test, to_model_point, to_view_point};
pub use types::{HierarchyDimensions, HierarchyNode, ViewNode, WindowNode};
