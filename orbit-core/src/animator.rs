//! Time-based tween animator for snapping the position to a target slide

use std::time::{Duration, Instant};

use crate::circular::{shortest_delta, wrap};

/// Quartic ease-out: fast start, long settle.
#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// One sampled step of a snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapStep {
    /// Interpolated position, wrapped into `[0, n)`.
    pub position: f32,
    /// Set on the sample that reaches the end of the ease.
    pub done: bool,
}

/// Eases the position from a fractional start to an integer target.
///
/// `end` is stored unwrapped (it may lie outside `[0, n)`) so that the
/// interpolation always travels the short way around the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimator {
    start: f32,
    end: f32,
    target: usize,
    started_at: Instant,
    duration: Duration,
}

impl SnapAnimator {
    /// Begin a snap from `position` towards `target` on a loop of `n`.
    pub fn new(
        position: f32,
        target: usize,
        n: usize,
        now: Instant,
        duration: Duration,
    ) -> Self {
        let start = position;
        let end = start + shortest_delta(start, target as f32, n);
        Self {
            start,
            end,
            target,
            started_at: now,
            duration,
        }
    }

    /// Position the snap started from.
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Unwrapped interpolation target.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// The wrapped slide index this snap settles on.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Sample the ease at `now`.
    pub fn sample(&self, now: Instant, n: usize) -> SnapStep {
        let t = self.progress_at(now);
        if t >= 1.0 {
            return SnapStep {
                position: wrap(self.end, n),
                done: true,
            };
        }
        let eased = ease_out_quart(t);
        SnapStep {
            position: wrap(self.start + (self.end - self.start) * eased, n),
            done: false,
        }
    }
}
