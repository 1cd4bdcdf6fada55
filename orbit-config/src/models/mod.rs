//! Carousel configuration model and its defaults.

pub mod breakpoint;

pub use breakpoint::{Breakpoint, GeometryOverrides};

use crate::constants::{flat_profile, geometry, gesture, timing};
use crate::media::MediaCondition;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Presentation capability selected by the host platform layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderProfile {
    /// Full pseudo-3D projection: depth, rotation and blur.
    #[default]
    Full,
    /// Reduced-fidelity 2D projection for hosts without reliable 3D
    /// transforms. Forces the flat coefficients on top of any breakpoint.
    Flat,
}

impl RenderProfile {
    /// Shorthand for `self == RenderProfile::Flat`.
    pub fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }
}

/// The per-breakpoint visual coefficients consumed by the projection.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct VisualCoefficients {
    /// Rotation per slide of distance (deg).
    pub rotate_y: f32,
    /// Depth recession per slide of distance (px).
    pub z_depth: f32,
    /// Scale reduction per slide of distance.
    pub scale_drop: f32,
    /// Blur cap (px).
    pub blur_max: f32,
    /// Centre slide shift as a fraction of the slide width.
    pub active_left_bias: f32,
}

impl VisualCoefficients {
    /// Overwrite the coefficients that the flat profile cannot render.
    pub fn flattened(mut self) -> Self {
        self.rotate_y = flat_profile::ROTATE_Y;
        self.z_depth = flat_profile::Z_DEPTH;
        self.blur_max = flat_profile::BLUR_MAX;
        self
    }
}

/// Top-level carousel settings. Every field has a default so config files
/// only need to mention what they change.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Horizontal gap between slides (px).
    pub gap: f32,
    /// Fraction of the viewport reserved on each side for neighbouring
    /// slides. The slide width is `viewport * (1 - 2 * peek)`, capped by
    /// `max_slide_width`.
    pub peek: f32,
    /// Rotation about the Y axis per slide of distance (deg).
    pub rotate_y: f32,
    /// Depth recession per slide of distance (px).
    pub z_depth: f32,
    /// Scale reduction per slide of distance.
    pub scale_drop: f32,
    /// Maximum blur radius (px).
    pub blur_max: f32,
    /// Leftward shift applied to the slide nearest the centre, as a fraction
    /// of the slide width.
    pub active_left_bias: f32,
    /// Autoplay dwell time per slide (ms).
    pub interval_ms: u64,
    /// Snap ease duration (ms).
    pub transition_ms: u64,
    /// Whether the arrow-key adapter navigates.
    pub keyboard: bool,
    /// Slide width cap (px).
    pub max_slide_width: f32,
    /// Release speed (px/ms) above which a drag advances one extra slide.
    pub flick_threshold: f32,
    /// Minimum time window (ms) used when estimating drag velocity.
    pub min_sample_ms: u64,
    /// Full 3D or the flat fallback.
    pub profile: RenderProfile,
    /// Ordered responsive overrides. When several match, later entries win.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap: geometry::GAP,
            peek: geometry::PEEK,
            rotate_y: geometry::ROTATE_Y,
            z_depth: geometry::Z_DEPTH,
            scale_drop: geometry::SCALE_DROP,
            blur_max: geometry::BLUR_MAX,
            active_left_bias: geometry::ACTIVE_LEFT_BIAS,
            interval_ms: timing::INTERVAL_MS,
            transition_ms: timing::TRANSITION_MS,
            keyboard: true,
            max_slide_width: geometry::MAX_SLIDE_WIDTH,
            flick_threshold: gesture::FLICK_THRESHOLD,
            min_sample_ms: gesture::MIN_SAMPLE_MS,
            profile: RenderProfile::Full,
            breakpoints: default_breakpoints(),
        }
    }
}

impl CarouselConfig {
    /// Defaults without any responsive overrides.
    pub fn without_breakpoints() -> Self {
        Self {
            breakpoints: Vec::new(),
            ..Self::default()
        }
    }

    /// Base visual coefficients, before any breakpoint.
    pub fn visuals(&self) -> VisualCoefficients {
        VisualCoefficients {
            rotate_y: self.rotate_y,
            z_depth: self.z_depth,
            scale_drop: self.scale_drop,
            blur_max: self.blur_max,
            active_left_bias: self.active_left_bias,
        }
    }

    /// [`Self::interval_ms`] as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// [`Self::transition_ms`] as a `Duration`.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// [`Self::min_sample_ms`] as a `Duration`.
    pub fn min_sample(&self) -> Duration {
        Duration::from_millis(self.min_sample_ms)
    }
}

/// Breakpoints shipped with the component, narrowest last so that the
/// tightest matching layout wins.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    const TABLE: [(f32, f32, f32, f32, f32, f32); 4] = [
        // max-width, gap, peek, rotate_y, z_depth, scale_drop
        (1200.0, 24.0, 0.12, 28.0, 120.0, 0.08),
        (1000.0, 18.0, 0.09, 22.0, 90.0, 0.07),
        (768.0, 14.0, 0.06, 16.0, 70.0, 0.06),
        (560.0, 12.0, 0.05, 12.0, 60.0, 0.05),
    ];

    TABLE
        .iter()
        .map(|&(max_width, gap, peek, rotate_y, z_depth, scale_drop)| {
            Breakpoint {
                media: MediaCondition::max_width(max_width),
                overrides: GeometryOverrides {
                    gap: Some(gap),
                    peek: Some(peek),
                    rotate_y: Some(rotate_y),
                    z_depth: Some(z_depth),
                    scale_drop: Some(scale_drop),
                    blur_max: None,
                    active_left_bias: Some(0.0),
                },
            }
        })
        .collect()
}
