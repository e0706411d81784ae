use serde::{Deserialize, Serialize};

use crate::error::{RaylinesError, Result};

use super::vec2::Vec2;

/// Line segment between two points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit direction start -> end (`None` for degenerate segments)
    pub fn direction(&self) -> Option<Vec2> {
        self.start.direction_to(self.end)
    }

    /// Point at segment parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.start.lerp(self.end, t)
    }

    /// Shortest distance from `p` to any point on the segment
    pub fn distance_to_point(&self, p: Vec2) -> f64 {
        let d = self.end - self.start;
        let len2 = d.length_squared();
        if len2 <= 0.0 {
            return p.distance(self.start);
        }
        let t = ((p - self.start).dot(d) / len2).clamp(0.0, 1.0);
        p.distance(self.start + d * t)
    }
}

/// Circle collider
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub origin: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Radius must be finite and non-negative
    pub fn new(origin: Vec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 || !origin.is_finite() {
            return Err(RaylinesError::InvalidRadius(radius));
        }
        Ok(Self { origin, radius })
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.origin.distance_squared(p) <= self.radius * self.radius
    }
}

/// Half-line with a unit direction, so the ray parameter is a distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    direction: Vec2,
}

impl Ray {
    /// Normalizes `direction`; zero or non-finite directions give `None`
    pub fn new(origin: Vec2, direction: Vec2) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn point_at(&self, t: f64) -> Vec2 {
        self.origin + self.direction * t
    }
}
