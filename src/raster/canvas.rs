//! Canvas - flat packed-pixel raster
//!
//! One contiguous `Vec<u32>` in ABGR order, so the buffer can be handed to a
//! browser `ImageData` or a PNG encoder without conversion.

use crate::error::{RaylinesError, Result};

use super::color::{blend_packed, Rgb};

/// Fresh canvases start fully transparent
const CLEAR: u32 = 0x0000_0000;

pub struct Canvas {
    width: u32,
    height: u32,
    size: usize,
    /// ABGR packed color per pixel, row-major
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = (width as usize).checked_mul(height as usize);
        match size {
            Some(size) if size > 0 => Ok(Self {
                width,
                height,
                size,
                pixels: vec![CLEAR; size],
            }),
            _ => Err(RaylinesError::InvalidDimensions { width, height }),
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    // === Pixel access ===
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(*fast!(self.pixels, [self.index(x as u32, y as u32)]))
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_packed());
    }

    /// Source-over blend of `color` at `coverage`; out-of-bounds is a no-op
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: u32, coverage: f32) -> bool {
        if coverage <= 0.0 || !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        let dst = *fast!(self.pixels, [idx]);
        fast!(self.pixels, [idx] = blend_packed(dst, color, coverage));
        true
    }

    /// Row-major RGBA bytes
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size * 4);
        for px in self.pixels.iter() {
            out.extend_from_slice(&px.to_le_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_canvas() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert_eq!(Canvas::new(3, 2).unwrap().size(), 6);
    }

    #[test]
    fn fill_and_bytes_are_rgba() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        assert_eq!(canvas.get(0, 0), Some(0));
        canvas.fill(Rgb::from_u8(10, 20, 30));
        assert_eq!(canvas.to_rgba_bytes(), vec![10, 20, 30, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn blend_clips_to_bounds() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let white = Rgb::WHITE.to_packed();
        assert!(!canvas.blend(-1, 0, white, 1.0));
        assert!(!canvas.blend(0, 4, white, 1.0));
        assert!(!canvas.blend(1, 1, white, 0.0));
        assert!(canvas.blend(3, 3, white, 1.0));
        assert_eq!(canvas.get(3, 3), Some(white));
        assert_eq!(canvas.get(4, 4), None);
    }

    #[test]
    fn partial_blend_on_fresh_canvas_is_translucent_source() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        assert!(canvas.blend(0, 0, Rgb::WHITE.to_packed(), 0.5));
        assert_eq!(canvas.to_rgba_bytes(), vec![255, 255, 255, 128]);
    }
}
