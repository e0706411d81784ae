//! Scene configuration
//!
//! A sketch is described by a JSON document: canvas size, background, RNG seed
//! and an ordered list of layers drawn on top of each other.
//!
//! ```json
//! {
//!   "width": 800, "height": 800, "seed": 7,
//!   "layers": [
//!     { "kind": "grid", "num_bars": 8, "color": { "r": 1, "g": 1, "b": 1 }, "collidable": true },
//!     { "kind": "starburst", "origin": { "x": 400, "y": 400 }, "radius": 300,
//!       "num_lines": 90, "color": { "r": 1, "g": 0.8, "b": 0.2 }, "only_collisions": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RaylinesError, Result};
use crate::geometry::Vec2;
use crate::raster::Rgb;
use crate::sketch::{ArcLines, Branching};

pub const DEFAULT_SIZE: u32 = 1500;
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(100.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub seed: u64,
    pub layers: Vec<Layer>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            background: DEFAULT_BACKGROUND,
            seed: 0,
            layers: Vec::new(),
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SketchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RaylinesError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.layers.iter().try_for_each(Layer::validate)
    }
}

/// One drawing step of a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Repaint the whole canvas
    Background { color: Rgb },
    /// Evenly spaced vertical and horizontal lines
    Grid {
        num_bars: u32,
        color: Rgb,
        /// Register every grid line as a collidable
        #[serde(default)]
        collidable: bool,
    },
    /// Register the canvas edges as collidables
    Bounds,
    /// Register a circle collidable, optionally drawing its outline
    CircleCollider {
        origin: Vec2,
        radius: f64,
        #[serde(default)]
        color: Option<Rgb>,
        #[serde(default = "default_outline_width")]
        width: f64,
    },
    /// Rays fanned evenly around `origin`
    Starburst {
        origin: Vec2,
        radius: f64,
        num_lines: u32,
        color: Rgb,
        /// Draw only rays that hit something, cut at the hit
        #[serde(default)]
        only_collisions: bool,
    },
    ArcLines(ArcLines),
    Branching(Branching),
}

fn default_outline_width() -> f64 {
    1.0
}

impl Layer {
    pub fn validate(&self) -> Result<()> {
        match self {
            Layer::Background { .. } | Layer::Grid { .. } | Layer::Bounds => Ok(()),
            Layer::CircleCollider { radius, width, .. } => {
                if !radius.is_finite() || *radius < 0.0 {
                    return Err(RaylinesError::InvalidRadius(*radius));
                }
                if !width.is_finite() || *width <= 0.0 {
                    return Err(RaylinesError::InvalidStrokeWidth(*width));
                }
                Ok(())
            }
            Layer::Starburst { radius, .. } => {
                if !radius.is_finite() || *radius < 0.0 {
                    return Err(RaylinesError::invalid("radius", "must be finite and non-negative"));
                }
                Ok(())
            }
            Layer::ArcLines(params) => params.validate(),
            Layer::Branching(params) => params.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Background { .. } => "background",
            Layer::Grid { .. } => "grid",
            Layer::Bounds => "bounds",
            Layer::CircleCollider { .. } => "circle_collider",
            Layer::Starburst { .. } => "starburst",
            Layer::ArcLines(_) => "arc_lines",
            Layer::Branching(_) => "branching",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SketchConfig::from_json("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.width, 1500);
    }

    #[test]
    fn parses_tagged_layers() {
        let json = r#"{
            "width": 200, "height": 100, "seed": 3,
            "layers": [
                { "kind": "bounds" },
                { "kind": "grid", "num_bars": 4, "color": { "r": 1, "g": 1, "b": 1 } },
                { "kind": "circle_collider", "origin": { "x": 50, "y": 50 }, "radius": 10 },
                { "kind": "arc_lines", "center": { "x": 0, "y": 0 } },
                { "kind": "branching", "origin": { "x": 100, "y": 90 } }
            ]
        }"#;
        let config = SketchConfig::from_json(json).unwrap();
        assert_eq!(config.layers.len(), 5);
        assert_eq!(config.layers[0], Layer::Bounds);
        assert!(matches!(config.layers[1], Layer::Grid { num_bars: 4, collidable: false, .. }));
        assert!(matches!(config.layers[2], Layer::CircleCollider { color: None, width, .. } if width == 1.0));
        assert_eq!(config.layers[3].kind(), "arc_lines");
        assert_eq!(config.layers[4].kind(), "branching");
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            SketchConfig::from_json(r#"{ "width": 0 }"#),
            Err(RaylinesError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "layers": [ { "kind": "spiral" } ] }"#),
            Err(RaylinesError::Config(_))
        ));
        let bad_radius = r#"{ "layers": [ { "kind": "circle_collider", "origin": { "x": 0, "y": 0 }, "radius": -2 } ] }"#;
        assert!(matches!(SketchConfig::from_json(bad_radius), Err(RaylinesError::InvalidRadius(_))));
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = SketchConfig::default();
        config.layers.push(Layer::Bounds);
        let json = config.to_json().unwrap();
        assert_eq!(SketchConfig::from_json(&json).unwrap(), config);
    }
}
