use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero when normalizing
const MIN_LENGTH: f64 = 1e-12;

/// 2D vector / point in canvas space (x right, y down)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `theta` radians
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { x: cos, y: sin }
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn perp_dot(&self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular
    pub fn perp(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    pub fn distance_squared(&self, other: Vec2) -> f64 {
        (other - *self).length_squared()
    }

    /// Returns `None` for zero-length or non-finite vectors
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > MIN_LENGTH {
            Some(Self { x: self.x / len, y: self.y / len })
        } else {
            None
        }
    }

    /// Unit direction from `self` towards `end`
    pub fn direction_to(&self, end: Vec2) -> Option<Self> {
        (end - *self).try_normalize()
    }

    pub fn lerp(&self, other: Vec2, t: f64) -> Self {
        *self + (other - *self) * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two points
#[inline]
pub fn dist(p0: Vec2, p1: Vec2) -> f64 {
    p0.distance(p1)
}

#[inline]
pub fn dist_sq(p0: Vec2, p1: Vec2) -> f64 {
    p0.distance_squared(p1)
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(Vec2::zero().try_normalize().is_none());
        assert!(Vec2::new(f64::NAN, 1.0).try_normalize().is_none());

        let n = Vec2::new(3.0, 4.0).try_normalize().unwrap();
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(n.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn perp_dot_sign_follows_orientation() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert_eq!(x.perp_dot(y), 1.0);
        assert_eq!(y.perp_dot(x), -1.0);
        assert_eq!(x.perp(), y);
    }

    #[test]
    fn distance_helpers_agree() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(dist(a, b), 5.0);
        assert_eq!(dist_sq(a, b), 25.0);
        assert_eq!(a.direction_to(b), Some(Vec2::new(0.6, 0.8)));
    }
}
