//! Raster - canvas, colors, strokes and PNG export

mod canvas;
mod color;
mod export;
mod stroke;

pub use canvas::Canvas;
pub use color::{blend_packed, Rgb};
