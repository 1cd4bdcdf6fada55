//! Message handlers for the carousel engine

use std::time::Instant;

use crate::autoplay::PauseReason;
use crate::carousel::Carousel;
use crate::gesture::{DragSession, release_target};
use crate::messages::{
    CarouselMessage, Effect, Effects, NavKey, PointerSample,
};
use crate::projection::Tilt;
use crate::state::Motion;

impl Carousel {
    /// Apply one input message and return the effects the host must perform.
    /// After teardown every message is ignored.
    pub fn update(&mut self, msg: CarouselMessage) -> Effects {
        if self.is_torn_down() {
            return Effects::none();
        }
        match msg {
            CarouselMessage::PointerDown(sample) => {
                handle_pointer_down(self, sample)
            }
            CarouselMessage::PointerMove(sample) => {
                handle_pointer_move(self, sample)
            }
            CarouselMessage::PointerUp(sample)
            | CarouselMessage::PointerCancel(sample) => {
                handle_pointer_release(self, sample)
            }
            CarouselMessage::Frame(now) => handle_frame(self, now),
            CarouselMessage::Resize { width, height } => {
                handle_resize(self, width, height)
            }
            CarouselMessage::BreakpointChanged { index, matches } => {
                handle_breakpoint(self, index, matches)
            }
            CarouselMessage::SetHovering { hovering, t } => {
                self.set_hovering(hovering, t)
            }
            CarouselMessage::GoTo { index, animate, t } => {
                self.go_to(index, animate, t)
            }
            CarouselMessage::Next(t) => self.next(t),
            CarouselMessage::Prev(t) => self.prev(t),
            CarouselMessage::Key { key, t } => handle_key(self, key, t),
        }
    }
}

fn handle_pointer_down(
    carousel: &mut Carousel,
    sample: PointerSample,
) -> Effects {
    if !carousel.accepts_input() {
        return Effects::none();
    }
    // One drag at a time; a second contact is ignored until release.
    if carousel.state.motion.drag().is_some() {
        return Effects::none();
    }
    let Some(drag) = DragSession::begin(&sample) else {
        return Effects::none();
    };

    carousel.autoplay.pause(PauseReason::Drag, sample.t);
    if let Motion::Snapping(snap) = carousel.state.motion {
        // The drag keeps the clock held from the instant the snap began.
        carousel.autoplay.resume(PauseReason::Snap, sample.t);
        tracing::debug!(
            target_index = snap.target(),
            "snap interrupted by drag"
        );
    }
    carousel.state.motion = Motion::Dragging(drag);
    tracing::debug!(pointer = sample.id.0, x = sample.x, "drag started");

    let mut effects = Effects::from(Effect::CapturePointer(sample.id));
    effects.extend(update_tilt(carousel, &sample));
    effects
}

fn handle_pointer_move(
    carousel: &mut Carousel,
    sample: PointerSample,
) -> Effects {
    if !carousel.accepts_input() {
        return Effects::none();
    }
    let mut effects = update_tilt(carousel, &sample);

    let span = carousel.geometry().span();
    let min_sample = carousel.config().min_sample();
    let index = carousel.state.index;
    let total = carousel.state.total;

    if let Motion::Dragging(drag) = &mut carousel.state.motion {
        if !drag.owns(sample.id) {
            return effects;
        }
        let position = drag.track(&sample, index, span, total, min_sample);
        carousel.state.set_position(position);
        effects.push(Effect::Render);
    }
    effects
}

fn handle_pointer_release(
    carousel: &mut Carousel,
    sample: PointerSample,
) -> Effects {
    let Some(drag) = carousel.state.motion.drag().copied() else {
        return Effects::none();
    };
    if !drag.owns(sample.id) {
        return Effects::none();
    }

    carousel.state.motion = Motion::Idle;
    carousel.autoplay.resume(PauseReason::Drag, sample.t);

    let target = release_target(
        carousel.state.position,
        drag.velocity,
        carousel.config().flick_threshold,
        carousel.state.total,
    );
    tracing::debug!(
        pointer = sample.id.0,
        position = carousel.state.position,
        velocity = drag.velocity,
        target_index = target,
        "drag released"
    );

    let mut effects = Effects::from(Effect::ReleasePointer(sample.id));
    effects.extend(carousel.begin_snap(target, true, sample.t));
    effects
}

fn handle_frame(carousel: &mut Carousel, now: Instant) -> Effects {
    if !carousel.accepts_input() {
        return Effects::none();
    }
    match carousel.state.motion {
        Motion::Snapping(snap) => {
            let step = snap.sample(now, carousel.state.total);
            tracing::trace!(
                position = step.position,
                done = step.done,
                "snap frame"
            );
            if step.done {
                carousel.complete_snap(snap.target(), now)
            } else {
                carousel.state.set_position(step.position);
                Effect::Render.into()
            }
        }
        Motion::Dragging(_) => Effects::none(),
        Motion::Idle => {
            if carousel.autoplay.is_due(now) {
                tracing::trace!("autoplay interval elapsed");
                return carousel.next(now);
            }
            Effect::Progress(carousel.autoplay.progress(now)).into()
        }
    }
}

fn handle_resize(
    carousel: &mut Carousel,
    width: f32,
    height: f32,
) -> Effects {
    if !carousel.accepts_input() || !carousel.resolver.resize(width, height) {
        return Effects::none();
    }
    Effect::Render.into()
}

fn handle_breakpoint(
    carousel: &mut Carousel,
    index: usize,
    matches: bool,
) -> Effects {
    if !carousel.accepts_input()
        || !carousel.resolver.set_breakpoint_match(index, matches)
    {
        return Effects::none();
    }
    tracing::debug!(index, matches, "breakpoint applied");
    Effect::Render.into()
}

fn handle_key(carousel: &mut Carousel, key: NavKey, t: Instant) -> Effects {
    if !carousel.config().keyboard {
        return Effects::none();
    }
    match key {
        NavKey::Left => carousel.prev(t),
        NavKey::Right => carousel.next(t),
    }
}

fn update_tilt(carousel: &mut Carousel, sample: &PointerSample) -> Effects {
    let geometry = carousel.geometry();
    let tilt = Tilt::from_pointer(
        sample.x,
        sample.y,
        geometry.viewport_width,
        geometry.viewport_height,
    );
    if tilt == carousel.state.tilt {
        return Effects::none();
    }
    carousel.state.tilt = tilt;
    Effect::Render.into()
}
