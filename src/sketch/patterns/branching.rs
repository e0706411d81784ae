//! Branching - segments that grow, fork, and stop where they meet earlier lines
//!
//! Every drawn segment is registered as a collidable before its children are
//! grown, so later branches stop at it. A child starts exactly on its parent's
//! end point; the ray epsilon keeps it from colliding with the parent there.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{RaylinesError, Result};
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::SketchCore;

/// Children shorter than this are not grown, whatever `max_depth` allows
const MIN_BRANCH_LENGTH: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branching {
    pub origin: Vec2,
    /// Heading of the trunk in radians (default points up)
    #[serde(default = "default_angle")]
    pub angle: f64,
    #[serde(default = "default_length")]
    pub length: f64,
    /// Child length = parent length * decay
    #[serde(default = "default_length_decay")]
    pub length_decay: f64,
    #[serde(default = "default_min_children")]
    pub min_children: u32,
    #[serde(default = "default_max_children")]
    pub max_children: u32,
    /// Max deviation of a child heading from its parent, radians
    #[serde(default = "default_spread")]
    pub spread: f64,
    /// Generations including the trunk
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default = "default_max_segments")]
    pub max_segments: u32,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default = "default_width")]
    pub width: f64,
}

fn default_angle() -> f64 { -FRAC_PI_2 }
fn default_length() -> f64 { 200.0 }
fn default_length_decay() -> f64 { 0.7 }
fn default_min_children() -> u32 { 2 }
fn default_max_children() -> u32 { 3 }
fn default_spread() -> f64 { 0.6 }
fn default_max_depth() -> u32 { 6 }
fn default_max_segments() -> u32 { 10_000 }
fn default_color() -> Rgb { Rgb::WHITE }
fn default_width() -> f64 { 1.0 }

impl Branching {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            angle: default_angle(),
            length: default_length(),
            length_decay: default_length_decay(),
            min_children: default_min_children(),
            max_children: default_max_children(),
            spread: default_spread(),
            max_depth: default_max_depth(),
            max_segments: default_max_segments(),
            color: default_color(),
            width: default_width(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() || !self.angle.is_finite() {
            return Err(RaylinesError::invalid("origin", "origin and angle must be finite"));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(RaylinesError::invalid("length", "must be positive"));
        }
        if !self.length_decay.is_finite() || self.length_decay <= 0.0 {
            return Err(RaylinesError::invalid("length_decay", "must be positive"));
        }
        if self.min_children > self.max_children {
            return Err(RaylinesError::invalid("min_children", "must not exceed max_children"));
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(RaylinesError::invalid("spread", "must be finite and non-negative"));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(RaylinesError::InvalidStrokeWidth(self.width));
        }
        Ok(())
    }
}

/// Outcome of one branching run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BranchingSummary {
    pub segments: u32,
    /// Segments cut short by a collidable
    pub blocked: u32,
    /// Deepest generation drawn (trunk = 0)
    pub deepest: u32,
}

struct Branch {
    start: Vec2,
    angle: f64,
    length: f64,
    depth: u32,
}

pub(super) fn branching(sketch: &mut SketchCore, params: &Branching) -> Result<BranchingSummary> {
    params.validate()?;

    let mut summary = BranchingSummary::default();
    if params.max_depth == 0 {
        return Ok(summary);
    }

    let mut pending = vec![Branch {
        start: params.origin,
        angle: params.angle,
        length: params.length,
        depth: 0,
    }];

    while let Some(branch) = pending.pop() {
        if summary.segments >= params.max_segments {
            break;
        }

        let dir = Vec2::from_angle(branch.angle);
        let hit = sketch.cast(branch.start, dir, Some(branch.length));
        let end = match hit {
            Some(h) => h.point,
            None => branch.start + dir * branch.length,
        };

        sketch.line(params.color, branch.start, end, params.width)?;
        sketch.collidables.add_segment(branch.start, end);

        summary.segments += 1;
        summary.deepest = summary.deepest.max(branch.depth);

        if hit.is_some() {
            summary.blocked += 1;
            continue;
        }
        if branch.depth + 1 >= params.max_depth {
            continue;
        }

        let length = branch.length * params.length_decay;
        if length < MIN_BRANCH_LENGTH {
            continue;
        }
        // Every pending branch becomes a segment, so never queue past the cap
        let budget = (params.max_segments as usize)
            .saturating_sub(summary.segments as usize)
            .saturating_sub(pending.len());
        let children = sketch.rng.gen_range(params.min_children..=params.max_children);
        for _ in 0..(children as usize).min(budget) {
            let angle = branch.angle + sketch.rng.gen_range(-params.spread..=params.spread);
            pending.push(Branch {
                start: end,
                angle,
                length,
                depth: branch.depth + 1,
            });
        }
    }

    log::debug!(
        "branching: {} segments, {} blocked, depth {}",
        summary.segments,
        summary.blocked,
        summary.deepest
    );
    Ok(summary)
}
