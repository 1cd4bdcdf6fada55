//! Projection of the circular position onto per-slide visual parameters.
//!
//! Everything here is a pure function of the position, the resolved
//! geometry and the pointer tilt. No slide is special-cased: the active
//! slide is simply the one whose circular distance from the position is
//! smallest.

use orbit_config::Geometry;

use crate::circular::{nearest_index, shortest_delta};
use crate::constants::{
    MAX_SCALE_DROP, STACK_BASE, STACK_STEP, parallax, tilt as tilt_range,
};
use crate::state::Mode;

/// Pointer-derived tilt (deg), from the pointer's position in the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tilt {
    /// Rotation about the X axis: pointer low tilts the top away.
    pub x: f32,
    /// Rotation about the Y axis: pointer right turns the face right.
    pub y: f32,
}

impl Tilt {
    /// Tilt for a viewport-local pointer position. The position is
    /// normalised to `[-0.5, 0.5]` on both axes; a degenerate viewport gives
    /// no tilt.
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let mx = (x / width - 0.5).clamp(-0.5, 0.5);
        let my = (y / height - 0.5).clamp(-0.5, 0.5);
        Self {
            x: my * tilt_range::X_RANGE,
            y: mx * tilt_range::Y_RANGE,
        }
    }
}

/// Content-layer offsets (px) within a slide card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parallax {
    /// Foreground horizontal offset.
    pub x: f32,
    /// Foreground vertical offset.
    pub y: f32,
    /// Background horizontal offset.
    pub bg_x: f32,
    /// Background vertical offset.
    pub bg_y: f32,
}

/// Visual parameters for one slide in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlideVisual {
    /// Signed circular distance of this slide from the position.
    pub delta: f32,
    /// Horizontal offset of the slide's left edge from the viewport centre.
    pub translate_x: f32,
    /// Translation along Z (px); zero or negative.
    pub depth: f32,
    /// Rotation about the Y axis (deg).
    pub rotate_y: f32,
    /// Uniform scale, 1 at the centre.
    pub scale: f32,
    /// Blur radius (px).
    pub blur: f32,
    /// Stacking order; the nearest slide is on top.
    pub z_index: i32,
    /// Content-layer offsets.
    pub parallax: Parallax,
    /// Set on the canonical slide while the carousel is settled.
    pub settled: bool,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// One entry per slide, in slide order.
    pub slides: Vec<SlideVisual>,
    /// Pagination highlight: the slide nearest to the position.
    pub active_index: usize,
    /// Autoplay progress indicator value in `[0, 1]`.
    pub progress: f32,
    /// Motion mode at projection time.
    pub mode: Mode,
    /// Drop depth, rotation and blur from the style output.
    pub flat: bool,
    /// Tilt applied to this frame.
    pub tilt: Tilt,
}

/// Project every slide for the given position.
///
/// `settled` is the canonical index when no drag or snap is in flight; it
/// only drives the `settled` marker on the matching slide.
pub fn project(
    position: f32,
    settled: Option<usize>,
    geometry: &Geometry,
    tilt: Tilt,
    n: usize,
) -> Vec<SlideVisual> {
    (0..n)
        .map(|i| {
            let delta = shortest_delta(position, i as f32, n);
            let mut visual = project_slide(delta, geometry, tilt);
            visual.settled = settled == Some(i);
            visual
        })
        .collect()
}

/// Visual parameters for a slide at circular distance `delta`.
pub fn project_slide(
    delta: f32,
    geometry: &Geometry,
    tilt: Tilt,
) -> SlideVisual {
    let v = &geometry.visuals;
    let distance = delta.abs();
    let slide_width = geometry.slide_width;

    let weight = (1.0 - 2.0 * distance).max(0.0);
    let bias = slide_width * v.active_left_bias * weight;
    let translate_x = delta * geometry.span() - bias - slide_width / 2.0;

    let base = (-delta).clamp(-1.0, 1.0);
    let par_y = tilt.x * parallax::TILT_CONTENT_Y;

    SlideVisual {
        delta,
        translate_x,
        depth: -distance * v.z_depth,
        rotate_y: -delta * v.rotate_y,
        scale: 1.0 - (distance * v.scale_drop).min(MAX_SCALE_DROP),
        blur: (distance * v.blur_max).min(v.blur_max),
        z_index: STACK_BASE - (distance * STACK_STEP).round() as i32,
        parallax: Parallax {
            x: base * parallax::CONTENT_X + tilt.y * parallax::TILT_CONTENT_X,
            y: par_y,
            bg_x: base * parallax::BACKGROUND_X
                + tilt.y * parallax::TILT_BACKGROUND_X,
            bg_y: par_y * parallax::BACKGROUND_Y_RATIO,
        },
        settled: false,
    }
}

/// The slide highlighted by pagination: nearest to the position.
#[inline]
pub fn active_index(position: f32, n: usize) -> usize {
    nearest_index(position, n)
}
