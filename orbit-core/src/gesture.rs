//! Gesture interpreter: pointer drag to fractional position, and release
//! classification into a snap target.

use std::time::{Duration, Instant};

use crate::circular::{round_half_up, wrap, wrap_index};
use crate::messages::{PointerId, PointerSample};

/// Pointer origin recorded at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Viewport-local x at pointer-down.
    pub x: f32,
    /// Time of the pointer-down sample.
    pub t: Instant,
}

/// A drag in progress. Only the pointer that started it is honoured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer that owns the drag.
    pub pointer: PointerId,
    /// Where and when the drag began.
    pub anchor: DragAnchor,
    /// Most recent velocity estimate (px/ms), measured from the anchor.
    pub velocity: f32,
}

impl DragSession {
    /// Start a drag from a pointer-down sample. Secondary mouse buttons do
    /// not start drags.
    pub fn begin(sample: &PointerSample) -> Option<Self> {
        if !sample.is_primary() {
            return None;
        }
        Some(Self {
            pointer: sample.id,
            anchor: DragAnchor {
                x: sample.x,
                t: sample.t,
            },
            velocity: 0.0,
        })
    }

    /// Whether `id` is the pointer that started this drag.
    pub fn owns(&self, id: PointerId) -> bool {
        self.pointer == id
    }

    /// Track a pointer move and return the dragged position.
    ///
    /// Dragging right (`dx > 0`) lowers the position, revealing the previous
    /// slide. The anchor is never moved, so the velocity is a single sample
    /// over the whole drag so far, with the time window floored at
    /// `min_sample`.
    pub fn track(
        &mut self,
        sample: &PointerSample,
        index: usize,
        span: f32,
        n: usize,
        min_sample: Duration,
    ) -> f32 {
        let dx = sample.x - self.anchor.x;
        let elapsed = sample.t.saturating_duration_since(self.anchor.t);
        let dt_ms = elapsed.max(min_sample).as_secs_f32() * 1000.0;
        self.velocity = if dt_ms > 0.0 { dx / dt_ms } else { 0.0 };

        if span <= 0.0 {
            return index as f32;
        }
        wrap(index as f32 - dx / span, n)
    }
}

/// Classify a release into the slide to snap to.
///
/// Below the flick threshold the drag settles on the nearest slide. Above
/// it, the target steps exactly one slide from the nearest one, opposite
/// to the sign of the pointer velocity, however fast the flick was.
pub fn release_target(
    position: f32,
    velocity: f32,
    flick_threshold: f32,
    n: usize,
) -> usize {
    let nearest = round_half_up(position);
    let step = if velocity.abs() > flick_threshold {
        sign(velocity)
    } else {
        0
    };
    wrap_index(nearest - step, n)
}

#[inline]
fn sign(v: f32) -> i64 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::PointerKind;

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

    #[test]
    fn secondary_mouse_button_does_not_start() {
        let t0 = Instant::now();
        let mut down = sample(10.0, t0);
        down.kind = PointerKind::Mouse;
        down.button = 2;
        assert!(DragSession::begin(&down).is_none());
        down.button = 0;
        assert!(DragSession::begin(&down).is_some());
    }

    #[test]
    fn leftward_drag_advances_position() {
        let t0 = Instant::now();
        let mut drag = DragSession::begin(&sample(600.0, t0)).unwrap();
        let pos = drag.track(
            &sample(200.0, t0 + Duration::from_millis(200)),
            0,
            500.0,
            5,
            Duration::from_millis(16),
        );
        assert!((drag.velocity - -2.0).abs() < 1e-5);
        assert!((pos - 0.8).abs() < 1e-5);
    }

    #[test]
    fn rightward_drag_wraps_backwards() {
        let t0 = Instant::now();
        let mut drag = DragSession::begin(&sample(0.0, t0)).unwrap();
        let pos = drag.track(
            &sample(250.0, t0 + Duration::from_millis(500)),
            0,
            500.0,
            5,
            Duration::from_millis(16),
        );
        assert!((pos - 4.5).abs() < 1e-5);
        assert!((drag.velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn velocity_window_is_floored() {
        let t0 = Instant::now();
        let mut drag = DragSession::begin(&sample(0.0, t0)).unwrap();
        drag.track(
            &sample(-32.0, t0 + Duration::from_millis(1)),
            0,
            500.0,
            5,
            Duration::from_millis(16),
        );
        assert!((drag.velocity - -2.0).abs() < 1e-5);
    }

    #[test]
    fn release_follows_documented_formula() {
        // round(0.8) - sign(-2.0) = 1 + 1
        assert_eq!(release_target(0.8, -2.0, 0.18, 5), 2);
        // Slow release settles on the nearest slide.
        assert_eq!(release_target(0.8, -0.1, 0.18, 5), 1);
        assert_eq!(release_target(0.3, 0.0, 0.18, 5), 0);
        // Positive flick steps back and wraps.
        assert_eq!(release_target(0.2, 1.0, 0.18, 5), 4);
        // Exactly at threshold is not a flick.
        assert_eq!(release_target(2.0, 0.18, 0.18, 5), 2);
        // However fast, a flick moves one slide.
        assert_eq!(release_target(1.0, -50.0, 0.18, 5), 2);
    }
}
