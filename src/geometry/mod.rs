//! Geometry - 2D vectors, primitive shapes and their intersections

pub mod vec2;
pub mod shapes;
pub mod intersect;

pub use intersect::{
    intersect_line_circle, intersect_ray_circle, intersect_ray_segment, intersect_segment_circle,
    LineHit, RAY_EPSILON,
};
pub use shapes::{Circle, Ray, Segment};
pub use vec2::{dist, dist_sq, Vec2};
