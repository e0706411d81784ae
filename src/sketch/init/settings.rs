use rand::rngs::StdRng;
use rand::SeedableRng;

use super::render_stats::RenderStats;
use super::SketchCore;

pub(super) fn set_seed(sketch: &mut SketchCore, seed: u64) {
    sketch.seed = seed;
    sketch.rng = StdRng::seed_from_u64(seed);
}

pub(super) fn enable_stats(sketch: &mut SketchCore, enabled: bool) {
    sketch.stats_enabled = enabled;
    if !enabled {
        sketch.stats.reset();
    }
}

pub(super) fn get_stats(sketch: &SketchCore) -> RenderStats {
    sketch.stats.clone()
}

pub(super) fn reset_stats(sketch: &mut SketchCore) {
    sketch.stats.reset();
}
