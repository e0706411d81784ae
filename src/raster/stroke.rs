//! Anti-aliased strokes
//!
//! Coverage falls off linearly over one pixel at the stroke edge, measured from
//! pixel centres. Strokes thinner than a pixel are faded by their width. Lines
//! get round caps.

use std::f64::consts::TAU;

use crate::error::{RaylinesError, Result};
use crate::geometry::{Segment, Vec2};

use super::canvas::Canvas;
use super::color::Rgb;

/// Below this |sin| a line is treated as horizontal when computing row spans
const HORIZONTAL_EPSILON: f64 = 1e-3;

fn check_width(width: f64) -> Result<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(RaylinesError::InvalidStrokeWidth(width));
    }
    Ok(())
}

#[inline]
fn coverage(reach: f64, distance: f64, fade: f64) -> f32 {
    ((reach - distance).clamp(0.0, 1.0) * fade) as f32
}

/// Clamp a float pixel range to `0..limit`
#[inline]
fn span(lo: f64, hi: f64, limit: u32) -> std::ops::Range<i32> {
    let lo = lo.floor().max(0.0) as i32;
    let hi = (hi.ceil() + 1.0).min(limit as f64).max(0.0) as i32;
    lo..hi.max(lo)
}

impl Canvas {
    /// Stroke `p1 -> p2`; returns the number of pixels touched
    pub fn stroke_line(&mut self, p1: Vec2, p2: Vec2, color: Rgb, width: f64) -> Result<u64> {
        check_width(width)?;
        if !p1.is_finite() || !p2.is_finite() {
            return Err(RaylinesError::invalid("line", "endpoints must be finite"));
        }

        let seg = Segment::new(p1, p2);
        let Some(dir) = seg.direction() else {
            return Ok(0);
        };

        let packed = color.to_packed();
        let reach = width * 0.5 + 0.5;
        let fade = width.min(1.0);

        let min_x = p1.x.min(p2.x) - reach;
        let max_x = p1.x.max(p2.x) + reach;
        let rows = span(p1.y.min(p2.y) - reach, p1.y.max(p2.y) + reach, self.height());

        let mut touched = 0u64;
        for y in rows {
            let yc = y as f64 + 0.5;

            // Horizontal extent of the thick infinite line on this row
            let (lo, hi) = if dir.y.abs() < HORIZONTAL_EPSILON {
                (min_x, max_x)
            } else {
                let x_at = p1.x + (yc - p1.y) * dir.x / dir.y;
                let half = reach / dir.y.abs();
                ((x_at - half).max(min_x), (x_at + half).min(max_x))
            };
            if lo > hi {
                continue;
            }

            for x in span(lo, hi, self.width()) {
                let d = seg.distance_to_point(Vec2::new(x as f64 + 0.5, yc));
                if self.blend(x, y, packed, coverage(reach, d, fade)) {
                    touched += 1;
                }
            }
        }
        Ok(touched)
    }

    /// Stroke the arc from `theta1` to `theta2` (radians, increasing angle)
    ///
    /// If `theta2 < theta1` it is advanced by whole turns until it is not.
    pub fn stroke_arc(
        &mut self,
        origin: Vec2,
        radius: f64,
        theta1: f64,
        theta2: f64,
        color: Rgb,
        width: f64,
    ) -> Result<u64> {
        check_width(width)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(RaylinesError::InvalidRadius(radius));
        }
        if !origin.is_finite() || !theta1.is_finite() || !theta2.is_finite() {
            return Err(RaylinesError::invalid("arc", "origin and angles must be finite"));
        }

        let mut end = theta2;
        if end < theta1 {
            end += ((theta1 - end) / TAU).ceil() * TAU;
        }
        let sweep = end - theta1;
        let full = sweep >= TAU;

        let start_pt = origin + Vec2::from_angle(theta1) * radius;
        let end_pt = origin + Vec2::from_angle(end) * radius;

        let packed = color.to_packed();
        let reach = width * 0.5 + 0.5;
        let fade = width.min(1.0);
        let outer = radius + reach;
        let inner = (radius - reach).max(0.0);

        let mut touched = 0u64;
        let mut plot = |canvas: &mut Canvas, x: i32, y: i32| {
            let p = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
            let rel = p - origin;
            let on_arc = full || {
                let angle = rel.y.atan2(rel.x);
                (angle - theta1).rem_euclid(TAU) <= sweep
            };
            let d = if on_arc {
                (rel.length() - radius).abs()
            } else {
                p.distance(start_pt).min(p.distance(end_pt))
            };
            if canvas.blend(x, y, packed, coverage(reach, d, fade)) {
                touched += 1;
            }
        };

        for y in span(origin.y - outer, origin.y + outer, self.height()) {
            let dy = y as f64 + 0.5 - origin.y;
            if dy.abs() > outer {
                continue;
            }
            let x_out = (outer * outer - dy * dy).sqrt();
            if dy.abs() < inner {
                // Ring row: skip the hollow middle
                let x_in = (inner * inner - dy * dy).sqrt();
                for x in span(origin.x - x_out, origin.x - x_in, self.width()) {
                    plot(self, x, y);
                }
                let right = span(origin.x + x_in, origin.x + x_out, self.width());
                let left_end = (origin.x - x_in).ceil() as i32 + 1;
                for x in right.start.max(left_end)..right.end {
                    plot(self, x, y);
                }
            } else {
                for x in span(origin.x - x_out, origin.x + x_out, self.width()) {
                    plot(self, x, y);
                }
            }
        }
        Ok(touched)
    }

    pub fn stroke_circle(&mut self, origin: Vec2, radius: f64, color: Rgb, width: f64) -> Result<u64> {
        self.stroke_arc(origin, radius, 0.0, TAU, color, width)
    }
}
