use wasm_bindgen::prelude::*;

use crate::config::SketchConfig;
use crate::error::RaylinesError;
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::render_stats::RenderStats;
use super::{ArcLines, Branching, SketchCore};

fn to_js(err: RaylinesError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Sketch {
    core: SketchCore,
}

#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
impl Sketch {
    /// Create a transparent sketch with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Sketch, JsValue> {
        let core = SketchCore::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Canvas and background from a JSON scene; layers are not drawn
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Sketch, JsValue> {
        let config = SketchConfig::from_json(json).map_err(to_js)?;
        let core = SketchCore::from_config(&config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    #[wasm_bindgen(getter)]
    pub fn collidable_count(&self) -> usize { self.core.collidables().len() }

    pub fn set_seed(&mut self, seed: u64) {
        self.core.set_seed(seed);
    }

    /// Enable or disable render stats (adds timing overhead when enabled)
    pub fn enable_stats(&mut self, enabled: bool) {
        self.core.enable_stats(enabled);
    }

    /// Stats snapshot (zeros when stats disabled)
    pub fn get_stats(&self) -> RenderStats {
        self.core.stats()
    }

    pub fn reset_stats(&mut self) {
        self.core.reset_stats();
    }

    // === Drawing ===

    /// Color channels in 0..=1
    pub fn background(&mut self, r: f32, g: f32, b: f32) {
        self.core.background(Rgb::new(r, g, b));
    }

    pub fn line(&mut self, r: f32, g: f32, b: f32, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) -> Result<(), JsValue> {
        self.core
            .line(Rgb::new(r, g, b), Vec2::new(x1, y1), Vec2::new(x2, y2), width)
            .map_err(to_js)
    }

    pub fn arc(
        &mut self,
        r: f32,
        g: f32,
        b: f32,
        x: f64,
        y: f64,
        theta1: f64,
        theta2: f64,
        radius: f64,
        width: f64,
    ) -> Result<(), JsValue> {
        self.core
            .arc(Rgb::new(r, g, b), Vec2::new(x, y), theta1, theta2, radius, width)
            .map_err(to_js)
    }

    pub fn circle(&mut self, r: f32, g: f32, b: f32, x: f64, y: f64, radius: f64, width: f64) -> Result<(), JsValue> {
        self.core
            .circle(Rgb::new(r, g, b), Vec2::new(x, y), radius, width)
            .map_err(to_js)
    }

    pub fn grid(&mut self, num_bars: u32, r: f32, g: f32, b: f32, collidable: bool) -> Result<(), JsValue> {
        self.core.grid(num_bars, Rgb::new(r, g, b), collidable).map_err(to_js)
    }

    pub fn ray(&mut self, r: f32, g: f32, b: f32, x: f64, y: f64, dx: f64, dy: f64, length: f64) -> Result<(), JsValue> {
        self.core
            .ray(Rgb::new(r, g, b), Vec2::new(x, y), Vec2::new(dx, dy), length)
            .map_err(to_js)
    }

    /// Returns true when the ray hit something and was drawn
    pub fn ray_with_collisions(
        &mut self,
        r: f32,
        g: f32,
        b: f32,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        max_length: f64,
    ) -> Result<bool, JsValue> {
        let hit = self
            .core
            .ray_with_collisions(Rgb::new(r, g, b), Vec2::new(x, y), Vec2::new(dx, dy), max_length)
            .map_err(to_js)?;
        Ok(hit.is_some())
    }

    /// Returns the number of rays drawn
    pub fn starburst(
        &mut self,
        r: f32,
        g: f32,
        b: f32,
        x: f64,
        y: f64,
        radius: f64,
        num_lines: u32,
        only_collisions: bool,
    ) -> Result<u32, JsValue> {
        self.core
            .starburst(Rgb::new(r, g, b), Vec2::new(x, y), radius, num_lines, only_collisions)
            .map_err(to_js)
    }

    /// Default arc-lines pattern around (x, y); returns the stroke count
    pub fn arc_lines(&mut self, x: f64, y: f64) -> Result<u32, JsValue> {
        let strokes = self.core.arc_lines(&ArcLines::new(Vec2::new(x, y))).map_err(to_js)?;
        Ok(u32::try_from(strokes).unwrap_or(u32::MAX))
    }

    /// Default branching pattern from (x, y); returns the segment count
    pub fn branching(&mut self, x: f64, y: f64) -> Result<u32, JsValue> {
        let summary = self.core.branching(&Branching::new(Vec2::new(x, y))).map_err(to_js)?;
        Ok(summary.segments)
    }

    // === Collidables ===

    pub fn add_collidable_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.core.add_collidable_segment(Vec2::new(x1, y1), Vec2::new(x2, y2));
    }

    pub fn add_collidable_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.core.add_collidable_circle(Vec2::new(x, y), radius).map_err(to_js)
    }

    pub fn add_bounds(&mut self) {
        self.core.add_bounds();
    }

    pub fn clear_collidables(&mut self) {
        self.core.clear_collidables();
    }

    // === Scene ===

    /// Draw a JSON array of layers
    pub fn render_layers_json(&mut self, json: &str) -> Result<(), JsValue> {
        let layers: Vec<crate::config::Layer> =
            serde_json::from_str(json).map_err(|e| to_js(RaylinesError::from(e)))?;
        self.core.render_layers(&layers).map_err(to_js)
    }

    // === Pixel access ===

    /// Get pointer to the packed ABGR buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    /// Copy of the canvas as RGBA bytes (for ImageData)
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.core.canvas().to_rgba_bytes()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, JsValue> {
        self.core.encode_png().map_err(to_js)
    }
}

impl Sketch {
    /// Native access to the wrapped sketch
    pub fn core(&self) -> &SketchCore {
        &self.core
    }
}
