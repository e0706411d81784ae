use crate::error::Result;
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::SketchCore;

pub(super) fn background(sketch: &mut SketchCore, color: Rgb) {
    sketch.canvas.fill(color);
}

pub(super) fn line(sketch: &mut SketchCore, color: Rgb, p1: Vec2, p2: Vec2, width: f64) -> Result<()> {
    let pixels = sketch.canvas.stroke_line(p1, p2, color, width)?;
    sketch.record_stroke(pixels);
    Ok(())
}

pub(super) fn arc(
    sketch: &mut SketchCore,
    color: Rgb,
    origin: Vec2,
    theta1: f64,
    theta2: f64,
    radius: f64,
    width: f64,
) -> Result<()> {
    let pixels = sketch.canvas.stroke_arc(origin, radius, theta1, theta2, color, width)?;
    sketch.record_stroke(pixels);
    Ok(())
}

pub(super) fn circle(sketch: &mut SketchCore, color: Rgb, origin: Vec2, radius: f64, width: f64) -> Result<()> {
    let pixels = sketch.canvas.stroke_circle(origin, radius, color, width)?;
    sketch.record_stroke(pixels);
    Ok(())
}
