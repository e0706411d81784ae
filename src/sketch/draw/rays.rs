use std::f64::consts::TAU;

use crate::collision::RayHit;
use crate::error::{RaylinesError, Result};
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::{SketchCore, RAY_WIDTH};

fn check_length(name: &'static str, length: f64) -> Result<()> {
    if !length.is_finite() || length < 0.0 {
        return Err(RaylinesError::invalid(name, "must be finite and non-negative"));
    }
    Ok(())
}

pub(super) fn ray(sketch: &mut SketchCore, color: Rgb, start: Vec2, direction: Vec2, length: f64) -> Result<()> {
    check_length("length", length)?;
    let Some(dir) = direction.try_normalize() else {
        return Ok(());
    };
    sketch.line(color, start, start + dir * length, RAY_WIDTH)
}

pub(super) fn ray_with_collisions(
    sketch: &mut SketchCore,
    color: Rgb,
    start: Vec2,
    direction: Vec2,
    max_length: f64,
) -> Result<Option<RayHit>> {
    check_length("max_length", max_length)?;
    let Some(hit) = sketch.cast(start, direction, Some(max_length)) else {
        return Ok(None);
    };
    sketch.line(color, start, hit.point, RAY_WIDTH)?;
    Ok(Some(hit))
}

/// Returns how many rays were drawn
pub(super) fn starburst(
    sketch: &mut SketchCore,
    color: Rgb,
    start: Vec2,
    radius: f64,
    num_lines: u32,
    only_collisions: bool,
) -> Result<u32> {
    check_length("radius", radius)?;

    let mut drawn = 0u32;
    for i in 0..num_lines {
        let direction = Vec2::from_angle(TAU * i as f64 / num_lines as f64);
        if only_collisions {
            if ray_with_collisions(sketch, color, start, direction, radius)?.is_some() {
                drawn += 1;
            }
        } else {
            ray(sketch, color, start, direction, radius)?;
            drawn += 1;
        }
    }

    log::debug!("starburst at ({}, {}): {}/{} rays drawn", start.x, start.y, drawn, num_lines);
    Ok(drawn)
}
