use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use orbit_core::{
    Carousel, CarouselMessage, Mode, PointerId, PointerKind, PointerSample,
};
use serde::Serialize;

/// Highest simulated frame rate: one frame per microsecond.
pub const MAX_FPS: u32 = 1_000_000;

/// A synthetic drag: `dx` pixels over `ms` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flick {
    pub dx: f32,
    pub ms: u64,
}

impl FromStr for Flick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, ms) = s
            .split_once(':')
            .ok_or_else(|| format!("expected DX:MS, got {s:?}"))?;
        let dx = dx
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid DX {dx:?}: {e}"))?;
        let ms = ms
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid MS {ms:?}: {e}"))?;
        if !dx.is_finite() {
            return Err("DX must be finite".into());
        }
        Ok(Self { dx, ms })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub slides: usize,
    pub width: f32,
    pub height: f32,
    pub duration_ms: u64,
    pub fps: u32,
    pub flick: Option<Flick>,
}

#[derive(Debug, Serialize)]
struct Snapshot {
    t_ms: u64,
    index: usize,
    active_index: usize,
    mode: Mode,
    position: f32,
    progress: f32,
}

pub fn run(path: Option<&Path>, session: Session) -> Result<()> {
    if !(1..=MAX_FPS).contains(&session.fps) {
        bail!("--fps {} must lie in 1..={MAX_FPS}", session.fps);
    }
    let load = super::load_config(path)?;
    let t0 = Instant::now();
    let mut carousel = Carousel::new(
        session.slides,
        load.config,
        session.width,
        session.height,
        t0,
    );

    let mut last: Option<(usize, Mode)> = None;
    let mut emit = |carousel: &Carousel, t_ms: u64| -> Result<()> {
        let key = (carousel.active_index(), carousel.mode());
        if last == Some(key) {
            return Ok(());
        }
        last = Some(key);
        let snapshot = Snapshot {
            t_ms,
            index: carousel.index(),
            active_index: key.0,
            mode: key.1,
            position: carousel.position(),
            progress: carousel.progress(t0 + Duration::from_millis(t_ms)),
        };
        let line = serde_json::to_string(&snapshot)
            .context("failed to encode snapshot")?;
        println!("{line}");
        Ok(())
    };

    emit(&carousel, 0)?;

    if let Some(flick) = session.flick {
        let start = session.width / 2.0;
        let end = t0 + Duration::from_millis(flick.ms);
        carousel.update(CarouselMessage::PointerDown(sample(start, t0)));
        emit(&carousel, 0)?;
        let release = sample(start + flick.dx, end);
        carousel.update(CarouselMessage::PointerMove(release));
        carousel.update(CarouselMessage::PointerUp(release));
        emit(&carousel, flick.ms)?;
    }

    let step_us = 1_000_000 / u64::from(session.fps);
    let total_us = session.duration_ms.saturating_mul(1_000);
    let mut elapsed_us = 0;
    while elapsed_us < total_us {
        elapsed_us = (elapsed_us + step_us).min(total_us);
        let now = t0 + Duration::from_micros(elapsed_us);
        carousel.update(CarouselMessage::Frame(now));
        emit(&carousel, elapsed_us / 1_000)?;
    }

    let teardown = carousel.teardown();
    tracing::debug!(handle = ?teardown.handle, "simulation finished");
    Ok(())
}

fn sample(x: f32, t: Instant) -> PointerSample {
    PointerSample {
        id: PointerId(1),
        x,
        y: 0.0,
        kind: PointerKind::Touch,
        button: 0,
        t,
    }
}
