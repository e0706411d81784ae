use crate::config::Layer;
use crate::error::Result;

use super::perf_timer::timed;
use super::SketchCore;

pub(super) fn render_layers(sketch: &mut SketchCore, layers: &[Layer]) -> Result<()> {
    let (result, ms) = timed(|| -> Result<()> {
        for layer in layers {
            layer.validate()?;
            log::debug!("rendering layer `{}`", layer.kind());
            render_layer(sketch, layer)?;
            if sketch.stats_enabled {
                sketch.stats.layers = sketch.stats.layers.saturating_add(1);
            }
        }
        Ok(())
    });

    if sketch.stats_enabled {
        sketch.stats.render_ms = ms;
    }
    result
}

fn render_layer(sketch: &mut SketchCore, layer: &Layer) -> Result<()> {
    match layer {
        Layer::Background { color } => sketch.background(*color),
        Layer::Grid { num_bars, color, collidable } => sketch.grid(*num_bars, *color, *collidable)?,
        Layer::Bounds => sketch.add_bounds(),
        Layer::CircleCollider { origin, radius, color, width } => {
            sketch.add_collidable_circle(*origin, *radius)?;
            if let Some(color) = color {
                sketch.circle(*color, *origin, *radius, *width)?;
            }
        }
        Layer::Starburst { origin, radius, num_lines, color, only_collisions } => {
            sketch.starburst(*color, *origin, *radius, *num_lines, *only_collisions)?;
        }
        Layer::ArcLines(params) => {
            sketch.arc_lines(params)?;
        }
        Layer::Branching(params) => {
            sketch.branching(params)?;
        }
    }
    Ok(())
}
