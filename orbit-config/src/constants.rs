//! Carousel configuration defaults
//!
//! Shared constants for the base geometry, timing and gesture tuning. Tuning
//! should happen here so the config defaults, the validation rules and the
//! CLI all update consistently.

/// Base geometry used when no breakpoint matches.
pub mod geometry {
    /// Horizontal gap between neighbouring slides (px).
    pub const GAP: f32 = 28.0;
    /// Fraction of the viewport left visible on each side of the active slide.
    pub const PEEK: f32 = 0.15;
    /// Y-axis rotation per slide of distance (deg).
    pub const ROTATE_Y: f32 = 34.0;
    /// Depth recession per slide of distance (px).
    pub const Z_DEPTH: f32 = 150.0;
    /// Scale reduction per slide of distance.
    pub const SCALE_DROP: f32 = 0.09;
    /// Blur radius ceiling (px).
    pub const BLUR_MAX: f32 = 2.0;
    /// Leftward shift of the active slide, as a fraction of its width.
    pub const ACTIVE_LEFT_BIAS: f32 = 0.0;
    /// Upper bound on the slide width regardless of viewport size (px).
    pub const MAX_SLIDE_WIDTH: f32 = 880.0;
}

/// Autoplay and snap timing.
pub mod timing {
    /// Time each slide stays active before autoplay advances (ms).
    pub const INTERVAL_MS: u64 = 4_500;
    /// Snap ease duration (ms).
    pub const TRANSITION_MS: u64 = 900;
}

/// Drag release classification.
pub mod gesture {
    /// Release speed above which a drag counts as a flick (px/ms).
    pub const FLICK_THRESHOLD: f32 = 0.18;
    /// Lower bound on the velocity sample window (ms).
    pub const MIN_SAMPLE_MS: u64 = 16;
}

/// Reduced-fidelity coefficients for hosts without reliable 3D transforms.
pub mod flat_profile {
    /// Shallow rotation (deg) that still reads without perspective.
    pub const ROTATE_Y: f32 = 10.0;
    /// No depth recession.
    pub const Z_DEPTH: f32 = 0.0;
    /// No blur.
    pub const BLUR_MAX: f32 = 0.0;
}

/// Hard ceiling on the per-slide scale reduction applied by the projection.
pub const MAX_SCALE_DROP: f32 = 0.42;

/// Default candidate locations probed when no env override is present.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "orbit.toml",
    "orbit.json",
    "config/orbit.toml",
    "config/orbit.json",
];

/// Environment variable naming a TOML or JSON config file.
pub const ENV_CONFIG_PATH: &str = "ORBIT_CONFIG_PATH";
/// Environment variable carrying an inline JSON config.
pub const ENV_CONFIG_JSON: &str = "ORBIT_CONFIG_JSON";
