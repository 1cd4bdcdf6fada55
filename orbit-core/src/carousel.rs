//! The carousel engine: owns the state, resolver, autoplay clock and frame
//! loop, and exposes the public navigation operations.

use std::time::Instant;

use orbit_config::{CarouselConfig, ConfigResolver, Geometry, RenderProfile};

use crate::animator::SnapAnimator;
use crate::autoplay::{AutoplayTimer, PauseReason};
use crate::circular::wrap_index;
use crate::frame_loop::{FrameHandle, FrameLoop};
use crate::messages::{Effect, Effects};
use crate::projection::{Frame, active_index, project};
use crate::state::{CarouselState, Mode, Motion};

/// What the host must clean up after [`Carousel::teardown`].
#[derive(Debug, Clone, PartialEq)]
pub struct Teardown {
    /// Frame callback handle to cancel, if one was armed.
    pub handle: Option<FrameHandle>,
    /// Remaining side effects, e.g. releasing a captured pointer.
    pub effects: Effects,
}

/// Position engine for one carousel instance.
#[derive(Debug, Clone)]
pub struct Carousel {
    pub(crate) resolver: ConfigResolver,
    pub(crate) state: CarouselState,
    pub(crate) autoplay: AutoplayTimer,
    pub(crate) frames: FrameLoop,
}

impl Carousel {
    /// Build an engine over `total` slides for a viewport of the given size.
    /// With `total == 0` the engine is inert: every message is a no-op.
    pub fn new(
        total: usize,
        config: CarouselConfig,
        width: f32,
        height: f32,
        now: Instant,
    ) -> Self {
        let autoplay = AutoplayTimer::new(config.interval(), now);
        let resolver = ConfigResolver::new(config, width, height);
        if total == 0 {
            tracing::debug!("carousel created with no slides; engine is inert");
        }
        Self {
            resolver,
            state: CarouselState::new(total),
            autoplay,
            frames: FrameLoop::new(),
        }
    }

    /// Read-only view of the engine state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// The configuration as loaded, before breakpoints.
    pub fn config(&self) -> &CarouselConfig {
        self.resolver.base()
    }

    /// Resolver holding the live breakpoint matches.
    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// Geometry for the current viewport and breakpoints.
    pub fn geometry(&self) -> &Geometry {
        self.resolver.geometry()
    }

    /// Number of slides in the loop.
    pub fn len(&self) -> usize {
        self.state.total
    }

    /// True for an inert engine with no slides.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Canonical active slide.
    pub fn index(&self) -> usize {
        self.state.index
    }

    /// Fractional circular position.
    pub fn position(&self) -> f32 {
        self.state.position
    }

    /// Current motion mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Slide to highlight in pagination. Agrees with [`Self::index`] except
    /// while a drag or snap is in flight.
    pub fn active_index(&self) -> usize {
        active_index(self.state.position, self.state.total)
    }

    /// Autoplay progress in `[0, 1]`. Held at its last idle value while a
    /// drag or snap owns the position.
    pub fn progress(&self, now: Instant) -> f32 {
        self.autoplay.progress(now)
    }

    /// Whether [`Self::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.frames.is_torn_down()
    }

    /// Record the host's frame callback handle.
    pub fn arm_frame(&mut self, handle: FrameHandle) {
        self.frames.arm(handle);
    }

    /// Whether the host should schedule another frame tick.
    pub fn wants_frames(&self) -> bool {
        self.frames.wants_frames() && !self.is_empty()
    }

    /// Project the current state into per-slide visuals.
    pub fn frame(&self, now: Instant) -> Frame {
        let geometry = self.resolver.geometry();
        Frame {
            slides: project(
                self.state.position,
                self.state.settled_index(),
                geometry,
                self.state.tilt,
                self.state.total,
            ),
            active_index: self.active_index(),
            progress: self.autoplay.progress(now),
            mode: self.state.mode(),
            flat: geometry.flat,
            tilt: self.state.tilt,
        }
    }

    /// Navigate to `index`, wrapped into range. Ignored while dragging.
    pub fn go_to(
        &mut self,
        index: i64,
        animate: bool,
        now: Instant,
    ) -> Effects {
        if !self.accepts_input() || self.state.mode() == Mode::Dragging {
            return Effects::none();
        }
        let target = wrap_index(index, self.state.total);
        self.begin_snap(target, animate, now)
    }

    /// Advance one slide.
    pub fn next(&mut self, now: Instant) -> Effects {
        self.step(1, now)
    }

    /// Go back one slide.
    pub fn prev(&mut self, now: Instant) -> Effects {
        self.step(-1, now)
    }

    /// Pause or resume autoplay for pointer hover.
    pub fn set_hovering(&mut self, hovering: bool, now: Instant) -> Effects {
        if !self.accepts_input() || self.state.hovering == hovering {
            return Effects::none();
        }
        self.state.hovering = hovering;
        if hovering {
            self.autoplay.pause(PauseReason::Hover, now);
        } else {
            self.autoplay.resume(PauseReason::Hover, now);
        }
        tracing::trace!(hovering, "autoplay hover state changed");
        Effect::Progress(self.autoplay.progress(now)).into()
    }

    /// Switch render fidelity at runtime.
    pub fn set_profile(&mut self, profile: RenderProfile) -> Effects {
        if !self.accepts_input() || !self.resolver.set_profile(profile) {
            return Effects::none();
        }
        Effect::Render.into()
    }

    /// Stop the engine for good. The caller must cancel the returned frame
    /// handle and perform the returned effects.
    pub fn teardown(&mut self) -> Teardown {
        let mut effects = Effects::none();
        if let Some(drag) = self.state.motion.drag() {
            effects.push(Effect::ReleasePointer(drag.pointer));
        }
        self.state.motion = Motion::Idle;
        let handle = self.frames.disarm();
        tracing::debug!(?handle, "carousel torn down");
        Teardown { handle, effects }
    }

    pub(crate) fn accepts_input(&self) -> bool {
        !self.is_empty() && !self.frames.is_torn_down()
    }

    /// Relative navigation. While snapping the step is taken from the
    /// pending target, so rapid calls accumulate.
    fn step(&mut self, delta: i64, now: Instant) -> Effects {
        let base = match self.state.motion {
            Motion::Dragging(_) => return Effects::none(),
            Motion::Snapping(snap) => snap.target(),
            Motion::Idle => self.state.index,
        };
        self.go_to(base as i64 + delta, true, now)
    }

    /// Start easing toward `target`, replacing any snap already in flight.
    /// The autoplay clock is held for the duration of the ease.
    pub(crate) fn begin_snap(
        &mut self,
        target: usize,
        animate: bool,
        now: Instant,
    ) -> Effects {
        let duration = self.config().transition();
        if !animate || duration.is_zero() {
            return self.complete_snap(target, now);
        }
        let snap = SnapAnimator::new(
            self.state.position,
            target,
            self.state.total,
            now,
            duration,
        );
        tracing::debug!(
            from = snap.start(),
            to = snap.end(),
            target_index = target,
            "snap started"
        );
        self.state.motion = Motion::Snapping(snap);
        self.autoplay.pause(PauseReason::Snap, now);
        Effect::Render.into()
    }

    pub(crate) fn complete_snap(
        &mut self,
        target: usize,
        now: Instant,
    ) -> Effects {
        self.state.settle(target);
        self.autoplay.resume(PauseReason::Snap, now);
        self.autoplay.restart(now);
        tracing::debug!(index = target, "snap completed");
        let mut effects = Effects::from(Effect::Render);
        effects.push(Effect::Progress(self.autoplay.progress(now)));
        effects
    }
}
