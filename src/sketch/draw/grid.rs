use crate::error::Result;
use crate::geometry::Vec2;
use crate::raster::Rgb;

use super::{SketchCore, GRID_WIDTH};

pub(super) fn grid(sketch: &mut SketchCore, num_bars: u32, color: Rgb, register: bool) -> Result<()> {
    let width = sketch.width() as f64;
    let height = sketch.height() as f64;

    for i in 0..num_bars {
        let offset = i as f64 * width / num_bars as f64;

        let vertical = (Vec2::new(offset, 0.0), Vec2::new(offset, height));
        let horizontal = (Vec2::new(0.0, offset), Vec2::new(width, offset));

        for (start, end) in [vertical, horizontal] {
            sketch.line(color, start, end, GRID_WIDTH)?;
            if register {
                sketch.collidables.add_segment(start, end);
            }
        }
    }
    Ok(())
}
