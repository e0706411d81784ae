//! Collidables - registry of segments and circles that stop rays
//!
//! The set is scanned linearly on every query; there is no spatial index.

mod perf;

pub use perf::{reset_scan_counters, take_scan_counters, ScanCounters};

use crate::error::Result;
use crate::geometry::{intersect_ray_circle, intersect_ray_segment, Circle, Ray, Segment, Vec2};

/// A ray intersection measured from the ray start
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray start to `point`
    pub distance: f64,
    pub point: Vec2,
}

/// Registry of everything a ray can collide with
#[derive(Clone, Debug, Default)]
pub struct Collidables {
    lines: Vec<Segment>,
    circles: Vec<Circle>,
}

impl Collidables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: Segment) {
        self.lines.push(line);
    }

    pub fn add_segment(&mut self, start: Vec2, end: Vec2) {
        self.lines.push(Segment::new(start, end));
    }

    pub fn add_circle(&mut self, origin: Vec2, radius: f64) -> Result<()> {
        self.circles.push(Circle::new(origin, radius)?);
        Ok(())
    }

    /// Registers the four edges of a `width` x `height` canvas
    pub fn add_bounds(&mut self, width: f64, height: f64) {
        let tl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(width, 0.0);
        let br = Vec2::new(width, height);
        let bl = Vec2::new(0.0, height);
        self.lines.extend([
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]);
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.lines.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
    }

    /// Every hit along the ray, nearest first
    ///
    /// With `max_length`, hits at or beyond that distance are dropped. A zero
    /// `direction` has no hits.
    pub fn ray_intersections(&self, start: Vec2, direction: Vec2, max_length: Option<f64>) -> Vec<RayHit> {
        let Some(ray) = Ray::new(start, direction) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        self.scan(&ray, max_length, |hit| hits.push(hit));

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Nearest hit along the ray, same filtering as `ray_intersections`
    pub fn nearest_hit(&self, start: Vec2, direction: Vec2, max_length: Option<f64>) -> Option<RayHit> {
        let ray = Ray::new(start, direction)?;

        let mut best: Option<RayHit> = None;
        self.scan(&ray, max_length, |hit| {
            if best.map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        });
        best
    }

    fn scan(&self, ray: &Ray, max_length: Option<f64>, mut on_hit: impl FnMut(RayHit)) {
        let within = |d: f64| max_length.map_or(true, |max| d < max);
        let mut hit_count = 0usize;

        for line in self.lines.iter() {
            if let Some(hit) = intersect_ray_segment(ray, line) {
                let distance = ray.origin.distance(hit.point);
                if within(distance) {
                    hit_count += 1;
                    on_hit(RayHit { distance, point: hit.point });
                }
            }
        }

        for circle in self.circles.iter() {
            for hit in intersect_ray_circle(ray, circle) {
                let distance = ray.origin.distance(hit.point);
                if within(distance) {
                    hit_count += 1;
                    on_hit(RayHit { distance, point: hit.point });
                }
            }
        }

        perf::record_scan(self.lines.len(), self.circles.len(), hit_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn walls() -> Collidables {
        let mut c = Collidables::new();
        c.add_segment(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0));
        c.add_segment(Vec2::new(20.0, -5.0), Vec2::new(20.0, 5.0));
        c.add_circle(Vec2::new(30.0, 0.0), 2.0).unwrap();
        c
    }

    #[test]
    fn intersections_are_sorted_by_distance() {
        let c = walls();
        let hits = c.ray_intersections(Vec2::zero(), Vec2::new(1.0, 0.0), None);
        let distances: Vec<f64> = hits.iter().map(|h| h.distance).collect();
        assert_eq!(distances.len(), 4);
        assert_abs_diff_eq!(distances[0], 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(distances[1], 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(distances[2], 28.0, epsilon = 1e-9);
        assert_abs_diff_eq!(distances[3], 32.0, epsilon = 1e-9);
    }

    #[test]
    fn max_length_is_exclusive() {
        let c = walls();
        let hits = c.ray_intersections(Vec2::zero(), Vec2::new(1.0, 0.0), Some(20.0));
        assert_eq!(hits.len(), 1);
        assert!(c.ray_intersections(Vec2::zero(), Vec2::new(1.0, 0.0), Some(5.0)).is_empty());
    }

    #[test]
    fn direction_length_does_not_matter() {
        let c = walls();
        let a = c.nearest_hit(Vec2::zero(), Vec2::new(1.0, 0.0), None).unwrap();
        let b = c.nearest_hit(Vec2::zero(), Vec2::new(250.0, 0.0), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn nearest_hit_matches_first_sorted_hit() {
        let c = walls();
        let start = Vec2::new(15.0, 1.0);
        let dir = Vec2::new(1.0, 0.0);
        let sorted = c.ray_intersections(start, dir, None);
        let nearest = c.nearest_hit(start, dir, None).unwrap();
        assert_eq!(sorted[0], nearest);
        assert_abs_diff_eq!(nearest.distance, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_direction_and_empty_registry_have_no_hits() {
        let c = walls();
        assert!(c.ray_intersections(Vec2::zero(), Vec2::zero(), None).is_empty());
        assert!(Collidables::new().nearest_hit(Vec2::zero(), Vec2::new(1.0, 0.0), None).is_none());
    }

    #[test]
    fn bounds_stop_rays_inside_canvas() {
        let mut c = Collidables::new();
        c.add_bounds(100.0, 50.0);
        assert_eq!(c.len(), 4);

        let hit = c.nearest_hit(Vec2::new(50.0, 25.0), Vec2::new(0.0, -1.0), None).unwrap();
        assert_abs_diff_eq!(hit.distance, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn scan_counters_track_tests_and_hits() {
        let c = walls();
        reset_scan_counters();
        c.ray_intersections(Vec2::zero(), Vec2::new(1.0, 0.0), None);
        c.nearest_hit(Vec2::zero(), Vec2::new(0.0, 1.0), None);

        let counters = take_scan_counters();
        assert_eq!(counters.segments_tested, 4);
        assert_eq!(counters.circles_tested, 2);
        assert_eq!(counters.hits, 4);
        assert_eq!(take_scan_counters(), ScanCounters::default());
    }

    #[test]
    fn invalid_circle_is_not_registered() {
        let mut c = Collidables::new();
        assert!(c.add_circle(Vec2::zero(), -3.0).is_err());
        assert!(c.is_empty());
    }
}
