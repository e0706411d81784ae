//! Ray / segment / circle intersection
//!
//! Ray–segment: 2D cross-product parametrisation of
//! `origin + t * dir = p1 + s * (p2 - p1)`, solved for both parameters.
//! Circle: quadratic formula on the centre-relative origin.
//!
//! Ray parameters are distances (rays carry a unit direction). Parameters at or
//! below `RAY_EPSILON` are rejected, so a ray never collides with geometry it
//! starts on.

use super::shapes::{Circle, Ray, Segment};
use super::vec2::Vec2;

/// Smallest accepted ray parameter
pub const RAY_EPSILON: f64 = 1e-9;

/// Relative threshold below which a ray and a segment count as parallel
const PARALLEL_EPSILON: f64 = 1e-12;

/// Intersection at parameter `t` along the tested ray, line or segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit {
    pub t: f64,
    pub point: Vec2,
}

/// Ray against a line segment (endpoints inclusive)
///
/// Parallel and collinear configurations report no hit.
pub fn intersect_ray_segment(ray: &Ray, segment: &Segment) -> Option<LineHit> {
    let dir = ray.direction();
    let v1 = ray.origin - segment.start;
    let v2 = segment.end - segment.start;
    let v3 = dir.perp();

    let denom = v2.dot(v3);
    if denom.abs() <= PARALLEL_EPSILON * v2.length() {
        return None;
    }

    let t_ray = v2.perp_dot(v1) / denom;
    let t_seg = v1.dot(v3) / denom;

    if t_ray > RAY_EPSILON && (0.0..=1.0).contains(&t_seg) {
        Some(LineHit { t: t_ray, point: ray.point_at(t_ray) })
    } else {
        None
    }
}

/// Infinite line `origin + t * direction` against a circle
///
/// `direction` is used as given, so `t` is in units of its length. Both roots
/// come back in ascending order; a tangent line yields the same root twice.
pub fn intersect_line_circle(origin: Vec2, direction: Vec2, circle: &Circle) -> Option<[LineHit; 2]> {
    let oc = origin - circle.origin;
    let a = direction.length_squared();
    if a == 0.0 || !a.is_finite() {
        return None;
    }
    let b = direction.dot(oc);
    let c = oc.length_squared() - circle.radius * circle.radius;

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let t0 = (-b - root) / a;
    let t1 = (-b + root) / a;
    let point = |t: f64| origin + direction * t;

    Some([
        LineHit { t: t0, point: point(t0) },
        LineHit { t: t1, point: point(t1) },
    ])
}

/// Ray against a circle outline
///
/// Returns 0, 1 or 2 hits in ascending distance. A ray starting inside the
/// circle hits it exactly once.
pub fn intersect_ray_circle(ray: &Ray, circle: &Circle) -> Vec<LineHit> {
    let Some(roots) = intersect_line_circle(ray.origin, ray.direction(), circle) else {
        return Vec::new();
    };
    collect_roots(roots, |t| t > RAY_EPSILON)
}

/// Segment against a circle outline; `t` is the segment parameter in `[0, 1]`
pub fn intersect_segment_circle(segment: &Segment, circle: &Circle) -> Vec<LineHit> {
    let Some(roots) = intersect_line_circle(segment.start, segment.end - segment.start, circle) else {
        return Vec::new();
    };
    collect_roots(roots, |t| (0.0..=1.0).contains(&t))
}

#[inline]
fn collect_roots(roots: [LineHit; 2], valid: impl Fn(f64) -> bool) -> Vec<LineHit> {
    let mut out = Vec::with_capacity(2);
    for hit in roots {
        if !valid(hit.t) {
            continue;
        }
        // tangent
        if out.last().is_some_and(|prev: &LineHit| prev.t == hit.t) {
            continue;
        }
        out.push(hit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Ray {
        Ray::new(Vec2::new(ox, oy), Vec2::new(dx, dy)).unwrap()
    }

    fn diagonal() -> Segment {
        Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn horizontal_ray_hits_diagonal_segment() {
        let hit = intersect_ray_segment(&ray(0.0, 5.0, 1.0, 0.0), &diagonal()).unwrap();
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn vertical_ray_hits_diagonal_segment() {
        let hit = intersect_ray_segment(&ray(5.0, 0.0, 0.0, 1.0), &diagonal()).unwrap();
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_rays_hit_from_both_sides() {
        let hit = intersect_ray_segment(&ray(0.0, 10.0, 10.0, -10.0), &diagonal()).unwrap();
        assert_abs_diff_eq!(hit.t, 50f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point.x, 5.0, epsilon = 1e-9);

        let hit = intersect_ray_segment(&ray(10.0, 0.0, -10.0, 10.0), &diagonal()).unwrap();
        assert_abs_diff_eq!(hit.point.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_ray_misses() {
        assert!(intersect_ray_segment(&ray(-2.0, 0.0, -1.0, -1.0), &diagonal()).is_none());
        // collinear overlap is not reported either
        assert!(intersect_ray_segment(&ray(-2.0, -2.0, 1.0, 1.0), &diagonal()).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        assert!(intersect_ray_segment(&ray(0.0, 5.0, -1.0, 0.0), &diagonal()).is_none());
    }

    #[test]
    fn ray_starting_on_segment_is_rejected() {
        assert!(intersect_ray_segment(&ray(5.0, 5.0, 1.0, -1.0), &diagonal()).is_none());
    }

    #[test]
    fn ray_past_segment_end_misses() {
        assert!(intersect_ray_segment(&ray(0.0, 12.0, 1.0, 0.0), &diagonal()).is_none());
        // endpoints are inclusive
        assert!(intersect_ray_segment(&ray(0.0, 10.0, 1.0, 0.0), &diagonal()).is_some());
    }

    #[test]
    fn line_through_center_gives_both_roots() {
        let circle = Circle::new(Vec2::zero(), 10.0).unwrap();
        let [near, far] = intersect_line_circle(Vec2::zero(), Vec2::new(1.0, 0.0), &circle).unwrap();
        assert_eq!(near.t, -10.0);
        assert_eq!(far.t, 10.0);
        assert_eq!(near.point, Vec2::new(-10.0, 0.0));
        assert_eq!(far.point, Vec2::new(10.0, 0.0));

        let circle = Circle::new(Vec2::zero(), 3.0).unwrap();
        let [near, far] = intersect_line_circle(Vec2::zero(), Vec2::new(0.0, 1.0), &circle).unwrap();
        assert_eq!(near.point, Vec2::new(0.0, -3.0));
        assert_eq!(far.point, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn line_t_is_in_direction_units() {
        let circle = Circle::new(Vec2::zero(), 4.0).unwrap();
        let [near, far] = intersect_line_circle(Vec2::new(-8.0, 0.0), Vec2::new(2.0, 0.0), &circle).unwrap();
        assert_eq!(near.t, 2.0);
        assert_eq!(far.t, 6.0);
    }

    #[test]
    fn line_outside_circle_misses() {
        let circle = Circle::new(Vec2::zero(), 3.0).unwrap();
        assert!(intersect_line_circle(Vec2::new(4.0, 0.0), Vec2::new(0.0, 1.0), &circle).is_none());
        assert!(intersect_line_circle(Vec2::zero(), Vec2::zero(), &circle).is_none());
    }

    #[test]
    fn ray_from_outside_hits_twice() {
        let circle = Circle::new(Vec2::new(10.0, 0.0), 2.0).unwrap();
        let hits = intersect_ray_circle(&ray(0.0, 0.0, 1.0, 0.0), &circle);
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0].t, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hits[1].t, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_from_inside_hits_once() {
        let circle = Circle::new(Vec2::zero(), 5.0).unwrap();
        let hits = intersect_ray_circle(&ray(1.0, 0.0, 1.0, 0.0), &circle);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].t, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_behind_circle_misses() {
        let circle = Circle::new(Vec2::new(-10.0, 0.0), 2.0).unwrap();
        assert!(intersect_ray_circle(&ray(0.0, 0.0, 1.0, 0.0), &circle).is_empty());
    }

    #[test]
    fn tangent_ray_reports_single_hit() {
        let circle = Circle::new(Vec2::new(5.0, 2.0), 2.0).unwrap();
        let hits = intersect_ray_circle(&ray(0.0, 0.0, 1.0, 0.0), &circle);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].point.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn tangent_line_returns_double_root() {
        let circle = Circle::new(Vec2::zero(), 3.0).unwrap();
        let [near, far] = intersect_line_circle(Vec2::new(-5.0, 3.0), Vec2::new(1.0, 0.0), &circle).unwrap();
        assert_eq!(near, far);
        assert_eq!(near.t, 5.0);
        assert_eq!(near.point, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn ray_starting_on_circle_skips_its_origin() {
        let circle = Circle::new(Vec2::zero(), 5.0).unwrap();
        let hits = intersect_ray_circle(&ray(-5.0, 0.0, 1.0, 0.0), &circle);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].t, 10.0);
        assert_eq!(hits[0].point, Vec2::new(5.0, 0.0));

        // pointing outward there is nothing left to hit
        assert!(intersect_ray_circle(&ray(-5.0, 0.0, -1.0, 0.0), &circle).is_empty());
    }

    #[test]
    fn segment_circle_keeps_roots_inside_segment() {
        let circle = Circle::new(Vec2::zero(), 5.0).unwrap();
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let hits = intersect_segment_circle(&seg, &circle);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].t, 0.5, epsilon = 1e-12);

        let short = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        assert!(intersect_segment_circle(&short, &circle).is_empty());

        let through = Segment::new(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(intersect_segment_circle(&through, &circle).len(), 2);
    }
}
