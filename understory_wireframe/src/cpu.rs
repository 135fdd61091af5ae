// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU raster surface backed by `vello_cpu`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Rect};
use peniko::Color;
use vello_cpu::kurbo::{Affine as CpuAffine, Rect as CpuRect, Stroke};
use vello_cpu::{Pixmap, RenderContext};

use crate::surface::Surface;

/// A [`Surface`] rasterized on the CPU by the sparse-strips [`RenderContext`].
///
/// Draw calls are recorded into the context and rasterized on
/// [`present`](Surface::present). The last presented frame is kept as
/// straight-alpha RGBA8 pixels for readback.
///
/// Each axis is limited to `u16::MAX` pixels. A surface with a zero-sized
/// axis has no context and ignores every draw.
pub struct CpuSurface {
    ctx: Option<RenderContext>,
    width: u16,
    height: u16,
    pixels: Vec<[u8; 4]>,
}

impl fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Creates a fully transparent surface of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            ctx: None,
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        surface.resize(width, height);
        surface
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Row-major RGBA pixels of the last presented frame.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// The pixel at `(x, y)` of the last presented frame, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixels
            .get(y as usize * usize::from(self.width) + x as usize)
            .copied()
    }
}

impl Surface for CpuSurface {
    fn resize(&mut self, width: u32, height: u32) {
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = u16::try_from(height).unwrap_or(u16::MAX);
        self.width = width;
        self.height = height;
        self.ctx = (width > 0 && height > 0).then(|| RenderContext::new(width, height));
        self.pixels = vec![[0; 4]; usize::from(width) * usize::from(height)];
    }

    fn reset_transform(&mut self) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.set_transform(CpuAffine::IDENTITY);
        }
    }

    fn clear(&mut self) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.reset();
        }
        self.pixels.fill([0; 4]);
    }

    fn set_transform(&mut self, transform: Affine) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.set_transform(affine_to_cpu(transform));
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.set_paint(color);
            ctx.fill_rect(&rect_to_cpu(rect));
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.set_stroke(Stroke::new(width));
            ctx.set_paint(color);
            ctx.stroke_rect(&rect_to_cpu(rect));
        }
    }

    fn present(&mut self) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };
        let mut pixmap = Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.pixels = pixmap
            .take_unpremultiplied()
            .into_iter()
            .map(|p| [p.r, p.g, p.b, p.a])
            .collect();
    }
}

fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

fn rect_to_cpu(rect: Rect) -> CpuRect {
    CpuRect::new(rect.x0, rect.y0, rect.x1, rect.y1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn red() -> Color {
        Color::from_rgba8(255, 0, 0, 255)
    }

    fn covered(surface: &CpuSurface) -> Vec<(u32, u32)> {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.pixel(x, y).is_some_and(|p| p[3] != 0))
            .collect()
    }

    #[test]
    fn draws_appear_on_present() {
        let mut s = CpuSurface::new(10, 10);
        s.fill_rect(Rect::new(2.0, 3.0, 5.0, 4.0), red());
        assert!(s.pixels().iter().all(|p| p[3] == 0));
        s.present();
        assert_eq!(s.pixel(2, 3), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(4, 3), Some([255, 0, 0, 255]));
        assert_eq!(covered(&s), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn fill_respects_transform() {
        let mut s = CpuSurface::new(20, 20);
        s.set_transform(Affine::translate(Vec2::new(4.0, 4.0)) * Affine::scale(2.0));
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), red());
        s.present();
        assert_eq!(covered(&s), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn reset_transform_restores_device_space() {
        let mut s = CpuSurface::new(8, 8);
        s.set_transform(Affine::scale(4.0));
        s.reset_transform();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), red());
        s.present();
        assert_eq!(covered(&s), vec![(0, 0)]);
    }

    #[test]
    fn clear_drops_recorded_draws() {
        let mut s = CpuSurface::new(4, 4);
        s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), red());
        s.present();
        s.clear();
        assert!(s.pixels().iter().all(|p| *p == [0; 4]));
        s.present();
        assert!(s.pixels().iter().all(|p| *p == [0; 4]));
    }

    #[test]
    fn stroke_leaves_interior_untouched() {
        let mut s = CpuSurface::new(12, 12);
        s.stroke_rect(Rect::new(2.0, 2.0, 10.0, 10.0), red(), 2.0);
        s.present();
        assert_eq!(s.pixel(1, 5).map(|p| p[3]), Some(255));
        assert_eq!(s.pixel(5, 1).map(|p| p[3]), Some(255));
        assert_eq!(s.pixel(5, 5), Some([0; 4]));
    }

    #[test]
    fn translucent_fill_keeps_straight_alpha() {
        let mut s = CpuSurface::new(2, 2);
        s.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::from_rgba8(0, 0, 255, 128));
        s.present();
        let [r, g, b, a] = s.pixel(1, 1).unwrap();
        assert_eq!((r, g), (0, 0));
        assert!(b >= 250, "{b}");
        assert!((127..=129).contains(&a), "{a}");
    }

    #[test]
    fn resize_reallocates_and_zero_size_is_inert() {
        let mut s = CpuSurface::new(2, 2);
        s.resize(3, 1);
        assert_eq!((s.width(), s.height()), (3, 1));
        assert_eq!(s.pixels().len(), 3);

        s.resize(0, 5);
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), red());
        s.present();
        assert!(s.pixels().is_empty());
        assert_eq!(s.pixel(0, 0), None);
    }
}
