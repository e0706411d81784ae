use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{RaylinesError, Result};

use super::canvas::Canvas;

impl Canvas {
    /// PNG-encoded RGBA image of the canvas
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let image = RgbaImage::from_raw(self.width(), self.height(), self.to_rgba_bytes())
            .ok_or_else(|| RaylinesError::invalid("canvas", "pixel buffer does not match dimensions"))?;

        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        log::info!(
            "wrote {}x{} canvas to {}",
            self.width(),
            self.height(),
            path.as_ref().display()
        );
        Ok(())
    }
}
