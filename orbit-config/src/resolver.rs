//! Configuration resolver: base settings + matching breakpoints + render
//! profile, projected onto the current viewport.

use crate::models::{CarouselConfig, RenderProfile, VisualCoefficients};

/// Derived layout for the current viewport and breakpoint set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Last reported viewport width (px).
    pub viewport_width: f32,
    /// Last reported viewport height (px).
    pub viewport_height: f32,
    /// Slide width after peek and the width cap (px).
    pub slide_width: f32,
    /// Effective gap (px).
    pub gap: f32,
    /// Effective peek fraction.
    pub peek: f32,
    /// Effective projection coefficients.
    pub visuals: VisualCoefficients,
    /// True when the flat render profile is active.
    pub flat: bool,
}

impl Geometry {
    /// Distance between the centres of two neighbouring slides (px).
    #[inline]
    pub fn span(&self) -> f32 {
        self.slide_width + self.gap
    }
}

/// How breakpoint matches are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// Conditions are evaluated locally against each reported width.
    ViewportWidth,
    /// The host pushes `{index, matches}` notifications from its own media
    /// query API. Switched to automatically on the first notification.
    Notifications,
}

/// Keeps [`Geometry`] in sync with the viewport, breakpoint matches and
/// render profile.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    base: CarouselConfig,
    matches: Vec<bool>,
    source: MatchSource,
    geometry: Geometry,
}

impl ConfigResolver {
    /// Resolve `base` for a `width` x `height` viewport, matching
    /// breakpoints locally.
    pub fn new(base: CarouselConfig, width: f32, height: f32) -> Self {
        let matches = vec![false; base.breakpoints.len()];
        let geometry = Geometry {
            viewport_width: width,
            viewport_height: height,
            slide_width: 0.0,
            gap: base.gap,
            peek: base.peek,
            visuals: base.visuals(),
            flat: base.profile.is_flat(),
        };
        let mut resolver = Self {
            base,
            matches,
            source: MatchSource::ViewportWidth,
            geometry,
        };
        resolver.evaluate_locally();
        resolver.recompute();
        resolver
    }

    /// The configuration as loaded, before any breakpoint is applied.
    pub fn base(&self) -> &CarouselConfig {
        &self.base
    }

    /// Current derived layout.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// How breakpoint matches are currently decided.
    pub fn match_source(&self) -> MatchSource {
        self.source
    }

    /// Indices of the breakpoints currently applied, in application order.
    pub fn active_breakpoints(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, matched)| matched.then_some(i))
    }

    /// Viewport resize. Returns true when the derived geometry changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.geometry.viewport_width = width;
        self.geometry.viewport_height = height;
        if self.source == MatchSource::ViewportWidth {
            self.evaluate_locally();
        }
        self.recompute()
    }

    /// Breakpoint notification from the host. Unknown indices are ignored.
    /// Returns true when the derived geometry changed.
    pub fn set_breakpoint_match(
        &mut self,
        index: usize,
        matches: bool,
    ) -> bool {
        let Some(slot) = self.matches.get_mut(index) else {
            tracing::debug!(index, "ignoring unknown breakpoint index");
            return false;
        };
        self.source = MatchSource::Notifications;
        *slot = matches;
        self.recompute()
    }

    /// Switch render profile. Returns true when the geometry changed.
    pub fn set_profile(&mut self, profile: RenderProfile) -> bool {
        self.base.profile = profile;
        self.recompute()
    }

    fn evaluate_locally(&mut self) {
        let width = self.geometry.viewport_width;
        for (slot, breakpoint) in
            self.matches.iter_mut().zip(&self.base.breakpoints)
        {
            *slot = breakpoint.media.matches(width);
        }
    }

    /// Rebuild the live geometry from the base config, every matching
    /// breakpoint in declaration order, then the render profile.
    fn recompute(&mut self) -> bool {
        let previous = self.geometry;

        let mut gap = self.base.gap;
        let mut peek = self.base.peek;
        let mut visuals = self.base.visuals();

        for (breakpoint, _) in self
            .base
            .breakpoints
            .iter()
            .zip(&self.matches)
            .filter(|(_, matched)| **matched)
        {
            let o = &breakpoint.overrides;
            gap = o.gap.unwrap_or(gap);
            peek = o.peek.unwrap_or(peek);
            visuals.rotate_y = o.rotate_y.unwrap_or(visuals.rotate_y);
            visuals.z_depth = o.z_depth.unwrap_or(visuals.z_depth);
            visuals.scale_drop = o.scale_drop.unwrap_or(visuals.scale_drop);
            visuals.blur_max = o.blur_max.unwrap_or(visuals.blur_max);
            visuals.active_left_bias =
                o.active_left_bias.unwrap_or(visuals.active_left_bias);
        }

        let flat = self.base.profile.is_flat();
        if flat {
            visuals = visuals.flattened();
        }

        let width = self.geometry.viewport_width.max(0.0);
        let slide_width = (width * (1.0 - 2.0 * peek))
            .min(self.base.max_slide_width)
            .max(0.0);

        self.geometry = Geometry {
            slide_width,
            gap,
            peek,
            visuals,
            flat,
            ..self.geometry
        };

        let changed = self.geometry != previous;
        if changed {
            tracing::debug!(
                width = self.geometry.viewport_width,
                slide_width,
                gap,
                breakpoints = ?self.active_breakpoints().collect::<Vec<_>>(),
                "carousel geometry resolved"
            );
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::geometry;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn wide_viewport_uses_base_and_cap() {
        let resolver =
            ConfigResolver::new(CarouselConfig::default(), 1920.0, 900.0);
        let g = resolver.geometry();
        assert_eq!(g.gap, geometry::GAP);
        // 1920 * 0.7 = 1344 is capped at 880.
        assert_eq!(g.slide_width, geometry::MAX_SLIDE_WIDTH);
        assert_eq!(resolver.active_breakpoints().count(), 0);
    }

    #[test]
    fn narrow_viewport_applies_last_matching_breakpoint() {
        let resolver =
            ConfigResolver::new(CarouselConfig::default(), 500.0, 800.0);
        let g = resolver.geometry();
        // All four max-width breakpoints match; the 560px one wins.
        assert_eq!(resolver.active_breakpoints().count(), 4);
        assert_eq!(g.gap, 12.0);
        assert!(approx(g.peek, 0.05));
        assert_eq!(g.visuals.rotate_y, 12.0);
        assert!(approx(g.slide_width, 500.0 * 0.9));
        // No breakpoint overrides blur, so the base value survives.
        assert_eq!(g.visuals.blur_max, geometry::BLUR_MAX);
    }

    #[test]
    fn resize_crossing_breakpoint_reports_change() {
        let mut resolver =
            ConfigResolver::new(CarouselConfig::default(), 1300.0, 800.0);
        assert!(resolver.resize(1100.0, 800.0));
        assert_eq!(resolver.geometry().gap, 24.0);
        assert!(!resolver.resize(1100.0, 800.0));
        assert!(resolver.resize(1300.0, 800.0));
        assert_eq!(resolver.geometry().gap, geometry::GAP);
    }

    #[test]
    fn notifications_take_over_matching() {
        let mut resolver =
            ConfigResolver::new(CarouselConfig::default(), 1300.0, 800.0);
        assert!(resolver.set_breakpoint_match(2, true));
        assert_eq!(resolver.match_source(), MatchSource::Notifications);
        assert_eq!(resolver.geometry().gap, 14.0);

        // Width is no longer evaluated locally.
        resolver.resize(400.0, 800.0);
        assert_eq!(resolver.geometry().gap, 14.0);

        assert!(!resolver.set_breakpoint_match(99, true));
        assert!(resolver.set_breakpoint_match(2, false));
        assert_eq!(resolver.geometry().gap, geometry::GAP);
    }

    #[test]
    fn flat_profile_wins_over_breakpoints() {
        let config = CarouselConfig {
            profile: RenderProfile::Flat,
            ..CarouselConfig::default()
        };
        let resolver = ConfigResolver::new(config, 700.0, 600.0);
        let g = resolver.geometry();
        assert!(g.flat);
        assert_eq!(g.visuals.rotate_y, 10.0);
        assert_eq!(g.visuals.z_depth, 0.0);
        assert_eq!(g.visuals.blur_max, 0.0);
        // Non-3D coefficients still follow the breakpoint.
        assert_eq!(g.gap, 14.0);
    }
}
