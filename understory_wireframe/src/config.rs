// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and spacing for the wireframe.

use kurbo::Vec2;
use peniko::Color;

/// Paint used for the base wireframe and the highlight overlay.
#[derive(Clone, Copy, Debug)]
pub struct WireframeStyle {
    /// Fill for every node rectangle on the base surface.
    pub node_fill: Color,
    /// Border for every node rectangle on the base surface.
    pub node_stroke: Color,
    /// Border width in model units.
    pub stroke_width: f64,
    /// Fill for the selected node on the overlay.
    pub selected_fill: Color,
    /// Fill for the hovered node on the overlay, drawn after the selection.
    pub hover_fill: Color,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            node_fill: Color::from_rgb8(0xf0, 0xec, 0xf3),
            node_stroke: Color::from_rgb8(0x80, 0x70, 0x8f),
            stroke_width: 1.0,
            selected_fill: Color::from_rgba8(0x3c, 0x74, 0xdd, 0x80),
            hover_fill: Color::from_rgba8(0x3c, 0x74, 0xdd, 0x26),
        }
    }
}

/// Configuration for a [`Wireframe`](crate::Wireframe).
#[derive(Clone, Copy, Debug)]
pub struct WireframeConfig {
    /// Minimum gap kept between the fitted content and each surface edge, in device pixels.
    pub margin: Vec2,
    /// Paint.
    pub style: WireframeStyle,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            margin: Vec2::new(20.0, 20.0),
            style: WireframeStyle::default(),
        }
    }
}
