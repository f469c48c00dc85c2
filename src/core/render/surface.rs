//=========================================================================
// Drawing Surface Contract
//=========================================================================
//
// The capability interface the world draws against.
//
// All coordinates are logical canvas units with a top-left origin. The
// surface implementation owns any scaling to physical pixels.
//
//=========================================================================

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xFF)
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

//=== Surface =============================================================

/// Primitive 2D drawing operations.
///
/// Implementations are side-effect only: nothing is read back by callers.
/// Shapes are filled, never stroked.
pub trait Surface {
    /// Resets a region to fully transparent.
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Fills an axis-aligned ellipse given its center and radii.
    fn fill_ellipse(&mut self, center: (f64, f64), radii: (f64, f64), color: Color);

    /// Fills a rectangle with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);

    /// Draws a single line of text with its baseline at `origin.1`.
    fn draw_text(&mut self, text: &str, origin: (f64, f64), size: f64, color: Color);
}

//=========================================================================
// Unit Tests
//=========================================================================
