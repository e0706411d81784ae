//! Sketch - drawing calls on top of the canvas and the collidable registry
//!
//! `SketchCore` owns one canvas, one collidable registry and a seeded RNG.
//! It only orchestrates; the actual work lives in the submodules:
//! - draw/     - primitive strokes, rays, grids
//! - patterns/ - exploratory generators (arc lines, branching)
//! - scene/    - config-driven layer rendering
//! - perf/     - render statistics
//! - facade    - the `Sketch` wasm binding

use rand::rngs::StdRng;

use crate::collision::{Collidables, RayHit};
use crate::config::{Layer, SketchConfig};
use crate::error::Result;
use crate::geometry::Vec2;
use crate::raster::{Canvas, Rgb};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/render_stats.rs"]
mod render_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "draw/primitives.rs"]
mod primitives;
#[path = "draw/rays.rs"]
mod rays;
#[path = "draw/grid.rs"]
mod grid;
#[path = "patterns/arc_lines.rs"]
mod arc_lines;
#[path = "patterns/branching.rs"]
mod branching;
#[path = "scene/layers.rs"]
mod layers;
mod facade;

pub use arc_lines::ArcLines;
pub use branching::{Branching, BranchingSummary};
pub use facade::Sketch;
pub use render_stats::RenderStats;


/// Stroke width used for rays
pub const RAY_WIDTH: f64 = 2.0;
/// Stroke width used for grid lines
pub const GRID_WIDTH: f64 = 0.5;

pub struct SketchCore {
    canvas: Canvas,
    collidables: Collidables,
    rng: StdRng,
    seed: u64,

    // Stats
    stats_enabled: bool,
    stats: RenderStats,
}

impl SketchCore {
    /// Transparent canvas, empty registry, seed 0
    pub fn new(width: u32, height: u32) -> Result<Self> {
        init::create_sketch_core(width, height, 0)
    }

    /// Canvas sized and filled per `config`; layers are not drawn yet
    pub fn from_config(config: &SketchConfig) -> Result<Self> {
        init::create_from_config(config)
    }

    pub fn width(&self) -> u32 { self.canvas.width() }

    pub fn height(&self) -> u32 { self.canvas.height() }

    pub fn seed(&self) -> u64 { self.seed }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn collidables(&self) -> &Collidables {
        &self.collidables
    }

    /// Restart the RNG stream
    pub fn set_seed(&mut self, seed: u64) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable stat collection (stats stay zero while disabled)
    pub fn enable_stats(&mut self, enabled: bool) {
        settings::enable_stats(self, enabled);
    }

    pub fn stats(&self) -> RenderStats {
        settings::get_stats(self)
    }

    pub fn reset_stats(&mut self) {
        settings::reset_stats(self);
    }

    // === Primitives ===

    pub fn background(&mut self, color: Rgb) {
        primitives::background(self, color)
    }

    pub fn line(&mut self, color: Rgb, p1: Vec2, p2: Vec2, width: f64) -> Result<()> {
        primitives::line(self, color, p1, p2, width)
    }

    pub fn arc(&mut self, color: Rgb, origin: Vec2, theta1: f64, theta2: f64, radius: f64, width: f64) -> Result<()> {
        primitives::arc(self, color, origin, theta1, theta2, radius, width)
    }

    pub fn circle(&mut self, color: Rgb, origin: Vec2, radius: f64, width: f64) -> Result<()> {
        primitives::circle(self, color, origin, radius, width)
    }

    // === Collidables ===

    pub fn add_collidable_segment(&mut self, start: Vec2, end: Vec2) {
        self.collidables.add_segment(start, end);
    }

    pub fn add_collidable_circle(&mut self, origin: Vec2, radius: f64) -> Result<()> {
        self.collidables.add_circle(origin, radius)
    }

    /// Register the canvas edges so every ray inside the canvas hits something
    pub fn add_bounds(&mut self) {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.collidables.add_bounds(w, h);
    }

    pub fn clear_collidables(&mut self) {
        self.collidables.clear();
    }

    // === Rays and grids ===

    /// `num_bars` vertical and horizontal lines, optionally registered as collidables
    pub fn grid(&mut self, num_bars: u32, color: Rgb, register: bool) -> Result<()> {
        grid::grid(self, num_bars, color, register)
    }

    /// Unobstructed ray of `length`
    pub fn ray(&mut self, color: Rgb, start: Vec2, direction: Vec2, length: f64) -> Result<()> {
        rays::ray(self, color, start, direction, length)
    }

    /// Ray drawn up to its nearest collision closer than `max_length`; nothing
    /// is drawn without a collision
    pub fn ray_with_collisions(
        &mut self,
        color: Rgb,
        start: Vec2,
        direction: Vec2,
        max_length: f64,
    ) -> Result<Option<RayHit>> {
        rays::ray_with_collisions(self, color, start, direction, max_length)
    }

    /// `num_lines` rays fanned evenly around `start`
    pub fn starburst(
        &mut self,
        color: Rgb,
        start: Vec2,
        radius: f64,
        num_lines: u32,
        only_collisions: bool,
    ) -> Result<u32> {
        rays::starburst(self, color, start, radius, num_lines, only_collisions)
    }

    // === Patterns ===

    pub fn arc_lines(&mut self, params: &ArcLines) -> Result<u64> {
        arc_lines::arc_lines(self, params)
    }

    pub fn branching(&mut self, params: &Branching) -> Result<BranchingSummary> {
        branching::branching(self, params)
    }

    // === Scene ===

    pub fn render_layers(&mut self, layers: &[Layer]) -> Result<()> {
        layers::render_layers(self, layers)
    }

    /// Build the canvas from `config` and draw all of its layers
    pub fn render_config(config: &SketchConfig) -> Result<Self> {
        let mut sketch = Self::from_config(config)?;
        sketch.render_layers(&config.layers)?;
        Ok(sketch)
    }

    // === Export ===

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.canvas.encode_png()
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.canvas.save_png(path)
    }

    /// Get pointer to the packed pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.canvas.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.canvas.size()
    }
}

// Internal helpers shared by the drawing submodules
impl SketchCore {
    /// Nearest collidable hit, folding scan counters into the stats
    fn cast(&mut self, start: Vec2, direction: Vec2, max_length: Option<f64>) -> Option<RayHit> {
        let hit = self.collidables.nearest_hit(start, direction, max_length);
        let counters = crate::collision::take_scan_counters();
        if self.stats_enabled {
            self.stats.rays_cast = self.stats.rays_cast.saturating_add(1);
            self.stats.add_scan(counters);
        }
        hit
    }

    fn record_stroke(&mut self, pixels: u64) {
        if self.stats_enabled {
            self.stats.add_stroke(pixels);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
