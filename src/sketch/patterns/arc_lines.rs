use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{RaylinesError, Result};
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::SketchCore;

/// Concentric rings of short radial strokes at Gaussian-scattered angles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcLines {
    pub center: Vec2,
    #[serde(default)]
    pub theta_start: f64,
    /// Mean of the angle scatter
    #[serde(default = "default_theta_end")]
    pub theta_end: f64,
    /// Ring spacing and stroke length
    #[serde(default = "default_increment")]
    pub increment: u32,
    #[serde(default = "default_passes")]
    pub passes: u32,
    /// Outer limit for ring radii; canvas width when absent
    #[serde(default)]
    pub extent: Option<f64>,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default = "default_width")]
    pub width: f64,
}

fn default_theta_end() -> f64 { TAU }
fn default_increment() -> u32 { 200 }
fn default_passes() -> u32 { 1 }
fn default_color() -> Rgb { Rgb::WHITE }
fn default_width() -> f64 { 0.2 }

impl ArcLines {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            theta_start: 0.0,
            theta_end: default_theta_end(),
            increment: default_increment(),
            passes: default_passes(),
            extent: None,
            color: default_color(),
            width: default_width(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.increment == 0 {
            return Err(RaylinesError::invalid("increment", "must be positive"));
        }
        if !self.theta_start.is_finite() || !self.theta_end.is_finite() {
            return Err(RaylinesError::invalid("theta", "angles must be finite"));
        }
        if let Some(extent) = self.extent {
            if !extent.is_finite() {
                return Err(RaylinesError::invalid("extent", "must be finite"));
            }
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(RaylinesError::InvalidStrokeWidth(self.width));
        }
        Ok(())
    }
}

/// Standard deviation of the angle scatter
const SCATTER_SIGMA: f64 = PI;

/// Box-Muller transform of two uniform samples
fn gaussian(rng: &mut impl Rng, mean: f64, sigma: f64) -> f64 {
    // 1 - [0, 1) keeps ln away from zero
    let u1 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    mean + sigma * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Returns the number of strokes drawn
pub(super) fn arc_lines(sketch: &mut SketchCore, params: &ArcLines) -> Result<u64> {
    params.validate()?;

    let extent = params.extent.unwrap_or(sketch.width() as f64);
    let inc = params.increment as f64;

    let mut strokes = 0u64;
    for _ in 0..params.passes {
        let mut ring = 0u32;
        loop {
            let r = ring as f64 * inc;
            if r >= extent - inc {
                break;
            }
            let segments = (r / 10.0).floor() as u32;
            for _ in 0..segments {
                let theta = params.theta_start + gaussian(&mut sketch.rng, params.theta_end, SCATTER_SIGMA);
                let (sin, cos) = theta.sin_cos();
                let start = params.center + Vec2::new(r * sin, r * cos);
                let end = params.center + Vec2::new((r + inc) * sin, (r + inc) * cos);
                sketch.line(params.color, start, end, params.width)?;
                strokes += 1;
            }
            ring += 1;
        }
    }

    log::debug!("arc_lines: {} strokes around ({}, {})", strokes, params.center.x, params.center.y);
    Ok(strokes)
}
