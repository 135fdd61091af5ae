// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_wireframe --heading-base-level=0

//! Understory Wireframe: a pan-and-select wireframe of a view hierarchy.
//!
//! Understory Wireframe draws every rectangle of an externally supplied
//! hierarchy onto a raster surface, lets the user pan it by dragging, and
//! reports which node a click landed on.
//!
//! - Fits the content into the viewport with a uniform scale and centers it.
//! - Renders onto two stacked surfaces: a base surface with the wireframe and
//!   an overlay with selection and hover highlights, so highlight changes
//!   never repaint the wireframe.
//! - Classifies pointer input into pans (any movement while pressed) and
//!   selections (a click without movement).
//!
//! The geometry underneath lives in [`understory_wireframe_geometry`],
//! re-exported here as [`geometry`].
//!
//! ## Ownership
//!
//! The hierarchy and the selection belong to the host. The engine reads the
//! hierarchy through [`HierarchyNode`], reports clicks as
//! [`WireframeEvent::NodeSelected`], and only shows a selection once the host
//! passes it back through [`Wireframe::set_selected`].
//!
//! ## Transforms
//!
//! There is one committed model→view transform, rebuilt by
//! [`fit_transform`] whenever the viewport or the content extent changes.
//! A drag renders through a working transform derived from it and replaces it
//! only when the pointer is released. Hit testing always uses the committed
//! transform.
//!
//! ## Surfaces
//!
//! Drawing goes through the [`Surface`] trait. Two implementations ship with
//! the crate:
//! - `CpuSurface`: rasterized with `vello_cpu` (enabled by the default
//!   `vello_cpu` feature), with RGBA8 readback.
//! - [`RecordingSurface`]: records calls as [`SurfaceOp`]s for assertions.
//!
//! Until both surfaces are attached every operation leaves them untouched and
//! pointer input is ignored.
//!
//! ## API overview
//!
//! - [`Wireframe`]: the engine. Feed it a hierarchy, a viewport, surfaces, and pointer events.
//! - [`PointerEvent`] in, [`WireframeEvent`] out.
//! - [`WireframeConfig`] / [`WireframeStyle`]: margin and paint.
//! - [`Renderer`], [`TransformState`], [`PanGesture`]: the parts the engine is built from,
//!   usable on their own.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_wireframe::{
//!     PointerEvent, RecordingSurface, WindowNode, Wireframe, WireframeConfig, WireframeEvent,
//! };
//!
//! let tree = WindowNode::new(1_u32, 0.0, 0.0, 100.0, 100.0)
//!     .with_child(WindowNode::new(2, 50.0, 50.0, 10.0, 10.0));
//!
//! let mut wf = Wireframe::new(WireframeConfig::default());
//! wf.set_viewport(Size::new(200.0, 200.0), 1.0);
//! wf.set_hierarchy(&[tree]);
//! wf.attach_base(RecordingSurface::new());
//! wf.attach_overlay(RecordingSurface::new());
//!
//! // Scale 1.6, content at (20, 20): the child spans (100, 100)..(116, 116).
//! let at = Point::new(108.0, 108.0);
//! wf.handle_pointer(PointerEvent::Down(at));
//! wf.handle_pointer(PointerEvent::Up(at));
//! let events = wf.handle_pointer(PointerEvent::Click(at));
//! assert_eq!(events, [WireframeEvent::NodeSelected(2)]);
//!
//! // Echo the selection back to highlight it.
//! wf.set_selected(Some(2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
#[cfg(feature = "vello_cpu")]
mod cpu;
mod gesture;
mod render;
mod surface;
mod transform;
mod wireframe;

pub use understory_wireframe_geometry as geometry;
pub use understory_wireframe_geometry::{HierarchyDimensions, HierarchyNode, ViewNode, WindowNode};

pub use config::{WireframeConfig, WireframeStyle};
#[cfg(feature = "vello_cpu")]
pub use cpu::CpuSurface;
pub use gesture::{Cursor, GestureAction, PanGesture, PointerEvent};
pub use render::{Redraw, Renderer};
pub use surface::{RecordingSurface, Surface, SurfaceOp};
pub use transform::{TransformState, fit_transform};
pub use wireframe::{Wireframe, WireframeEvent};
