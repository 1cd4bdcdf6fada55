//! Responsive breakpoints and the geometry they override.

use serde::{Deserialize, Serialize};

use crate::media::MediaCondition;

/// A responsive override set keyed by a media condition.
///
/// In config files the condition and the overrides sit side by side:
///
/// ```toml
/// [[breakpoints]]
/// media = "(max-width: 768px)"
/// gap = 14
/// rotate_y = 16
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Breakpoint {
    /// When the overrides apply.
    #[serde(alias = "mq")]
    pub media: MediaCondition,
    /// What they change.
    #[serde(flatten)]
    pub overrides: GeometryOverrides,
}

/// Geometry fields a breakpoint may overwrite. `None` leaves the current
/// value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeometryOverrides {
    /// See [`CarouselConfig::gap`](crate::CarouselConfig::gap).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// See [`CarouselConfig::peek`](crate::CarouselConfig::peek).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peek: Option<f32>,
    /// Per-slide rotation (deg).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f32>,
    /// Per-slide depth recession (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_depth: Option<f32>,
    /// Per-slide scale reduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_drop: Option<f32>,
    /// Blur cap (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_max: Option<f32>,
    /// Centre slide shift, as a fraction of the slide width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_left_bias: Option<f32>,
}

impl GeometryOverrides {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|(_, value)| value.is_none())
    }

    /// Field name/value pairs, in declaration order.
    pub fn values(&self) -> [(&'static str, Option<f32>); 7] {
        [
            ("gap", self.gap),
            ("peek", self.peek),
            ("rotate_y", self.rotate_y),
            ("z_depth", self.z_depth),
            ("scale_drop", self.scale_drop),
            ("blur_max", self.blur_max),
            ("active_left_bias", self.active_left_bias),
        ]
    }
}
