//! Projection constants
//!
//! Fixed coefficients of the slide projection that are not exposed through
//! the carousel configuration.

pub use orbit_config::constants::MAX_SCALE_DROP;

/// Stacking order of the slide sitting exactly on the position.
pub const STACK_BASE: i32 = 1000;
/// Stacking order lost per slide of distance.
pub const STACK_STEP: f32 = 10.0;

/// Pointer tilt range (deg) at the viewport edge.
pub mod tilt {
    /// Vertical pointer offset to X-axis tilt (inverted).
    pub const X_RANGE: f32 = -6.0;
    /// Horizontal pointer offset to Y-axis tilt.
    pub const Y_RANGE: f32 = 6.0;
}

/// Parallax coefficients for slide content layers (px).
pub mod parallax {
    /// Foreground shift per slide of distance.
    pub const CONTENT_X: f32 = 48.0;
    /// Background shift per slide of distance (counter to the foreground).
    pub const BACKGROUND_X: f32 = -64.0;
    /// Foreground shift per degree of Y tilt.
    pub const TILT_CONTENT_X: f32 = 2.0;
    /// Foreground shift per degree of X tilt.
    pub const TILT_CONTENT_Y: f32 = -1.5;
    /// Background shift per degree of Y tilt.
    pub const TILT_BACKGROUND_X: f32 = -2.4;
    /// Background vertical shift as a fraction of the foreground's.
    pub const BACKGROUND_Y_RATIO: f32 = 0.35;
}
