use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::Collidables;
use crate::config::SketchConfig;
use crate::error::Result;
use crate::raster::Canvas;

use super::render_stats::RenderStats;
use super::SketchCore;

pub(super) fn create_sketch_core(width: u32, height: u32, seed: u64) -> Result<SketchCore> {
    Ok(SketchCore {
        canvas: Canvas::new(width, height)?,
        collidables: Collidables::new(),
        rng: StdRng::seed_from_u64(seed),
        seed,
        stats_enabled: false,
        stats: RenderStats::default(),
    })
}

pub(super) fn create_from_config(config: &SketchConfig) -> Result<SketchCore> {
    config.validate()?;
    let mut sketch = create_sketch_core(config.width, config.height, config.seed)?;
    sketch.canvas.fill(config.background);
    log::debug!(
        "sketch {}x{} seed={} layers={}",
        config.width,
        config.height,
        config.seed,
        config.layers.len()
    );
    Ok(sketch)
}
