// Core types shared by the canvas, the stroker and the desktop host.

/// Opaque white, the default canvas background.
pub const WHITE: u32 = 0xFF_FF_FF_FF;
/// Opaque black, the default ink.
pub const BLACK: u32 = 0xFF_00_00_00;

/// Pack four channels as 0xAARRGGBB.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split 0xAARRGGBB into (a, r, g, b).
#[inline]
pub const fn channels(px: u32) -> (u8, u8, u8, u8) {
    (
        ((px >> 24) & 0xFF) as u8,
        ((px >> 16) & 0xFF) as u8,
        ((px >> 8) & 0xFF) as u8,
        (px & 0xFF) as u8,
    )
}

/// The persistent pixel grid holding committed drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,     // pixels per row
    pub height: usize,    // number of rows
    pub pixels: Vec<u32>, // each entry is 0xAARRGGBB, row-major
}

impl Raster {
    /// A `width` x `height` raster where every pixel is `fill`.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x, y), or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn is_uniform(&self, color: u32) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }

    /// How many pixels differ from `background` (a measure of ink).
    pub fn count_pixels_not(&self, background: u32) -> usize {
        self.pixels.iter().filter(|&&p| p != background).count()
    }
}

/// Coverage in [0,1] for a rectangular window of a raster.
/// 1 = fully inked, 0 = untouched.
#[derive(Clone, Debug)]
pub struct Mask {
    pub x: usize,        // left edge of the window in raster pixels
    pub y: usize,        // top edge of the window in raster pixels
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<f32>, // length = width * height, values clamped to [0.0, 1.0]
}

impl Mask {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height, alpha: vec![0.0; width * height] }
    }

    /// Coverage at raster coordinates (x, y); 0 outside the window.
    pub fn coverage_at(&self, x: usize, y: usize) -> f32 {
        if x < self.x || y < self.y || x >= self.x + self.width || y >= self.y + self.height {
            return 0.0;
        }
        self.alpha[(y - self.y) * self.width + (x - self.x)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// End-cap and corner shape of a stroke. Only round is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineShape {
    #[default]
    Round,
}

/// Paint parameters, fixed for a drawing session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: u32,      // ink, 0xAARRGGBB
    pub width: f32,      // full stroke width in pixels
    pub cap: LineShape,
    pub join: LineShape,
    pub anti_alias: bool,
    pub background: u32, // what a fresh or cleared canvas is filled with
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 20.0,
            cap: LineShape::Round,
            join: LineShape::Round,
            anti_alias: true,
            background: WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trips_channels() {
        let px = argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(px, 0x80_12_34_56);
        assert_eq!(channels(px), (0x80, 0x12, 0x34, 0x56));
    }

    #[test]
    fn raster_pixel_is_bounds_checked() {
        let r = Raster::new(3, 2, WHITE);
        assert_eq!(r.pixel(2, 1), Some(WHITE));
        assert_eq!(r.pixel(3, 0), None);
        assert_eq!(r.pixel(0, 2), None);
    }

    #[test]
    fn counts_ink_against_background() {
        let mut r = Raster::new(4, 4, WHITE);
        assert!(r.is_uniform(WHITE));
        r.pixels[5] = BLACK;
        r.pixels[6] = BLACK;
        assert_eq!(r.count_pixels_not(WHITE), 2);
        assert!(!r.is_uniform(WHITE));
    }

    #[test]
    fn mask_coverage_outside_window_is_zero() {
        let mut m = Mask::new(2, 3, 2, 2);
        m.alpha[3] = 0.5; // raster (3, 4)
        assert_eq!(m.coverage_at(3, 4), 0.5);
        assert_eq!(m.coverage_at(1, 3), 0.0);
        assert_eq!(m.coverage_at(4, 4), 0.0);
    }

    #[test]
    fn default_style_is_black_round_twenty_on_white() {
        let s = StrokeStyle::default();
        assert_eq!(s.color, BLACK);
        assert_eq!(s.width, 20.0);
        assert_eq!(s.cap, LineShape::Round);
        assert!(s.anti_alias);
        assert_eq!(s.background, WHITE);
    }
}
