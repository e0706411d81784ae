use std::env;
use std::fs;

use anyhow::{bail, Context};
use env_logger::Env;

use raylines::{SketchConfig, SketchCore};

const USAGE: &str = "usage: raylines <scene.json> <out.png> [--seed N]";

struct Args {
    scene: String,
    out: String,
    seed: Option<u64>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut seed = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(value.parse().with_context(|| format!("invalid seed `{value}`"))?);
            }
            "-h" | "--help" => bail!(USAGE),
            _ => positional.push(arg),
        }
    }

    let [scene, out]: [String; 2] = positional.try_into().map_err(|_| anyhow::anyhow!(USAGE))?;
    Ok(Args { scene, out, seed })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = parse_args()?;

    let json = fs::read_to_string(&args.scene).with_context(|| format!("reading {}", args.scene))?;
    let mut config = SketchConfig::from_json(&json).with_context(|| format!("parsing {}", args.scene))?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    log::info!(
        "rendering {} ({}x{}, {} layers, seed {})",
        args.scene,
        config.width,
        config.height,
        config.layers.len(),
        config.seed
    );

    let mut sketch = SketchCore::from_config(&config)?;
    sketch.enable_stats(true);
    sketch.render_layers(&config.layers)?;

    let stats = sketch.stats();
    log::info!(
        "{:.1} ms: {} rays ({} hits), {} segment / {} circle tests, {} strokes, {} pixels",
        stats.render_ms(),
        stats.rays_cast(),
        stats.ray_hits(),
        stats.segments_tested(),
        stats.circles_tested(),
        stats.strokes(),
        stats.pixels_touched()
    );

    sketch
        .save_png(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    Ok(())
}
