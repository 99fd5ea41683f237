//! Drawing-surface boundary so the overlay core never touches a renderer directly.
//!
//! The host supplies an implementation backed by whatever paints its HUD; the
//! core only asks for text extents, text, and a filled progress-style bar.

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale the alpha channel by `opacity` in [0, 1].
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: (self.a as f32 * opacity.clamp(0.0, 1.0)) as u8,
            ..self
        }
    }
}

/// Text-extent lookup, needed during layout before any drawing happens.
pub trait TextMeasure {
    /// Width and height of `text` in the HUD label font, in pixels.
    fn measure_text(&self, text: &str) -> (f32, f32);
}

/// Primitives the overlay draw pass calls into, one call per painted element.
pub trait DrawSurface: TextMeasure {
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgba);

    /// Paint a progress-style bar filled to `fraction` in [0, 1].
    fn draw_progress_bar(&mut self, rect: Rect, fraction: f32, fill: Rgba, outline: Rgba);
}
