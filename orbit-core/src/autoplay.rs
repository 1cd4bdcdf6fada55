//! Wall-clock autoplay timer with pausable progress

use std::time::{Duration, Instant};

/// Why the autoplay clock is frozen. Reasons are independent: the clock
/// resumes only when none remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// The pointer is over the carousel.
    Hover,
    /// A drag owns the position.
    Drag,
    /// A snap is easing toward its target.
    Snap,
}

/// Autoplay cycle clock. Progress is derived from timestamps on demand, so
/// nothing needs rescheduling when the clock is paused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayTimer {
    interval: Duration,
    started_at: Instant,
    paused_at: Option<Instant>,
    hover: bool,
    drag: bool,
    snap: bool,
}

impl AutoplayTimer {
    /// Start a running cycle at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            started_at: now,
            paused_at: None,
            hover: false,
            drag: false,
            snap: false,
        }
    }

    /// Whether any pause reason is active.
    pub fn is_paused(&self) -> bool {
        self.hover || self.drag || self.snap
    }

    /// Begin a new cycle at zero progress. Pause reasons survive: a paused
    /// timer restarts frozen at zero.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
        if self.is_paused() {
            self.paused_at = Some(now);
        }
    }

    /// Freeze the clock. The first reason records the pause instant.
    pub fn pause(&mut self, reason: PauseReason, now: Instant) {
        if !self.is_paused() {
            self.paused_at = Some(now);
        }
        self.set_reason(reason, true);
    }

    /// Drop one pause reason. When none remain, the cycle start moves forward
    /// by the paused duration so elapsed progress is preserved.
    pub fn resume(&mut self, reason: PauseReason, now: Instant) {
        self.set_reason(reason, false);
        if self.is_paused() {
            return;
        }
        if let Some(paused_at) = self.paused_at.take() {
            self.started_at += now.saturating_duration_since(paused_at);
        }
    }

    /// Progress of the current cycle in `[0, 1]`. While paused the clock
    /// reads as of the pause instant.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.interval.is_zero() {
            return 1.0;
        }
        let clock = self.paused_at.unwrap_or(now);
        let elapsed = clock.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the cycle has run its full interval and is not paused.
    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_paused() && self.progress(now) >= 1.0
    }

    fn set_reason(&mut self, reason: PauseReason, on: bool) {
        match reason {
            PauseReason::Hover => self.hover = on,
            PauseReason::Drag => self.drag = on,
            PauseReason::Snap => self.snap = on,
        }
    }
}
