use wasm_bindgen::prelude::*;

use crate::collision::ScanCounters;

/// Counters for everything drawn or cast since the last reset
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub(super) render_ms: f64,
    pub(super) rays_cast: u32,
    pub(super) ray_hits: u32,
    pub(super) segments_tested: u32,
    pub(super) circles_tested: u32,
    pub(super) strokes: u32,
    pub(super) pixels_touched: u32,
    pub(super) layers: u32,
}

impl RenderStats {
    pub(crate) fn reset(&mut self) {
        *self = RenderStats::default();
    }

    pub(super) fn add_scan(&mut self, counters: ScanCounters) {
        self.segments_tested = saturating_add(self.segments_tested, counters.segments_tested);
        self.circles_tested = saturating_add(self.circles_tested, counters.circles_tested);
        self.ray_hits = saturating_add(self.ray_hits, counters.hits);
    }

    pub(super) fn add_stroke(&mut self, pixels: u64) {
        self.strokes = self.strokes.saturating_add(1);
        self.pixels_touched = saturating_add(self.pixels_touched, pixels);
    }
}

#[inline]
fn saturating_add(acc: u32, n: u64) -> u32 {
    acc.saturating_add(u32::try_from(n).unwrap_or(u32::MAX))
}

#[wasm_bindgen]
impl RenderStats {
    /// Wall time of the last `render_layers` call
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn rays_cast(&self) -> u32 { self.rays_cast }
    #[wasm_bindgen(getter)]
    pub fn ray_hits(&self) -> u32 { self.ray_hits }
    #[wasm_bindgen(getter)]
    pub fn segments_tested(&self) -> u32 { self.segments_tested }
    #[wasm_bindgen(getter)]
    pub fn circles_tested(&self) -> u32 { self.circles_tested }
    #[wasm_bindgen(getter)]
    pub fn strokes(&self) -> u32 { self.strokes }
    #[wasm_bindgen(getter)]
    pub fn pixels_touched(&self) -> u32 { self.pixels_touched }
    #[wasm_bindgen(getter)]
    pub fn layers(&self) -> u32 { self.layers }
}
