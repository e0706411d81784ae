//! Raylines - generative line art driven by ray casting
//!
//! Rays are cast against a registry of segments and circles and drawn up to
//! their first hit.
//!
//! Architecture:
//! - geometry/  - vectors, shapes, intersection math
//! - collision/ - collidable registry and nearest-hit queries
//! - raster/    - pixel canvas, anti-aliased strokes, PNG export
//! - sketch/    - drawing calls, patterns, scene rendering, wasm facade
//! - config     - JSON scene description

// Utils with safety macros (must be first for macro export!)
#[macro_use]
mod utils;

pub mod collision;
pub mod config;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod sketch;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"raylines initialized".into());
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("raylines initialized");
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use collision::{Collidables, RayHit};
pub use config::{Layer, SketchConfig};
pub use error::{RaylinesError, Result};
pub use geometry::{Circle, LineHit, Ray, Segment, Vec2};
pub use raster::{Canvas, Rgb};
pub use sketch::{ArcLines, Branching, BranchingSummary, RenderStats, Sketch, SketchCore};
