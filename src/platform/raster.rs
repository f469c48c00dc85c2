//=========================================================================
// Software Canvas
//=========================================================================
//
// CPU rasteriser implementing `Surface` over an RGBA8 buffer sized to the
// logical canvas. The buffer is copied into the `pixels` frame each
// redraw; `pixels` scales it to the physical window.
//
// Coverage rule: a pixel is filled when its center lies inside the shape.
// Shapes are clipped to the buffer; nothing is anti-aliased.
//
//=========================================================================

use std::ops::Range;

use crate::core::render::{Color, Rect, Surface};

use super::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

//=== Canvas ==============================================================

pub(crate) struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major from the top-left.
    pub(crate) fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel indices whose centers fall in `[lo, hi)`, clipped to `limit`.
    fn span(lo: f64, hi: f64, limit: u32) -> Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().min(limit as f64);
        if !(end > start) {
            return 0..0;
        }
        start as u32..end as u32
    }

    fn write(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Source-over blend of `color` onto the pixel at `(x, y)`.
    fn blend(&mut self, x: u32, y: u32, color: Color) {
        match color.a {
            0 => {}
            255 => self.write(x, y, color),
            alpha => {
                let dst = self.pixel(x, y);
                let a = alpha as f64 / 255.0;
                let mix = |s: u8, d: u8| (s as f64 * a + d as f64 * (1.0 - a)).round() as u8;
                let out_a = (alpha as f64 + dst.a as f64 * (1.0 - a)).round() as u8;
                self.write(
                    x,
                    y,
                    Color::rgba(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b), out_a),
                );
            }
        }
    }

    fn fill_row(&mut self, y: u32, xs: Range<u32>, color: Color) {
        for x in xs {
            self.blend(x, y, color);
        }
    }
}

//=== Surface Implementation ==============================================

impl Surface for Canvas {
    fn clear(&mut self, rect: Rect) {
        for y in Self::span(rect.y, rect.bottom(), self.height) {
            for x in Self::span(rect.x, rect.right(), self.width) {
                self.write(x, y, Color::TRANSPARENT);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let xs = Self::span(rect.x, rect.right(), self.width);
        for y in Self::span(rect.y, rect.bottom(), self.height) {
            self.fill_row(y, xs.clone(), color);
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        let r = radius.max(0.0).min(rect.w / 2.0).min(rect.h / 2.0);
        let xs = Self::span(rect.x, rect.right(), self.width);

        for y in Self::span(rect.y, rect.bottom(), self.height) {
            let py = y as f64 + 0.5;
            let cy = py.clamp(rect.y + r, rect.bottom() - r);
            for x in xs.clone() {
                let px = x as f64 + 0.5;
                let cx = px.clamp(rect.x + r, rect.right() - r);
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, center: (f64, f64), radii: (f64, f64), color: Color) {
        let (cx, cy) = center;
        let (rx, ry) = radii;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        for y in Self::span(cy - ry, cy + ry, self.height) {
            let dy = (y as f64 + 0.5 - cy) / ry;
            let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
            let xs = Self::span(cx - half, cx + half, self.width);
            self.fill_row(y, xs, color);
        }
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        if rect.h <= 0.0 {
            return;
        }
        let xs = Self::span(rect.x, rect.right(), self.width);

        for y in Self::span(rect.y, rect.bottom(), self.height) {
            let t = (y as f64 + 0.5 - rect.y) / rect.h;
            self.fill_row(y, xs.clone(), top.lerp(bottom, t));
        }
    }

    fn draw_text(&mut self, text: &str, origin: (f64, f64), size: f64, color: Color) {
        let scale = (size / GLYPH_HEIGHT as f64).round().max(1.0);
        let top = origin.1 - GLYPH_HEIGHT as f64 * scale;
        let mut pen_x = origin.0;

        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                            let cell = Rect::new(
                                pen_x + col as f64 * scale,
                                top + row as f64 * scale,
                                scale,
                                scale,
                            );
                            self.fill_rect(cell, color);
                        }
                    }
                }
            }
            pen_x += ADVANCE as f64 * scale;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
