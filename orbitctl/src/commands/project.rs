use std::path::Path;

use anyhow::{Context, Result, bail};
use orbit_config::ConfigResolver;
use orbit_core::{Frame, Mode, Tilt, active_index, project, wrap};

pub fn run(
    path: Option<&Path>,
    slides: usize,
    position: f32,
    width: f32,
    height: f32,
) -> Result<()> {
    if !position.is_finite() {
        bail!("--position must be a finite number");
    }
    let load = super::load_config(path)?;
    let resolver = ConfigResolver::new(load.config, width, height);
    let geometry = resolver.geometry();

    let position = wrap(position, slides);
    // Whole positions are settled frames.
    let settled = (position.fract() == 0.0 && slides > 0)
        .then_some(position as usize);

    let frame = Frame {
        slides: project(position, settled, geometry, Tilt::default(), slides),
        active_index: active_index(position, slides),
        progress: 0.0,
        mode: Mode::Idle,
        flat: geometry.flat,
        tilt: Tilt::default(),
    };
    let json =
        serde_json::to_string_pretty(&frame).context("failed to encode frame")?;
    println!("{json}");
    Ok(())
}
