//! CarouselState: the single owned record every handler mutates

use crate::animator::SnapAnimator;
use crate::circular::wrap;
use crate::gesture::DragSession;
use crate::projection::Tilt;

/// Externally visible motion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Resting on the canonical index.
    #[default]
    Idle,
    /// A pointer owns the position.
    Dragging,
    /// Easing towards a target slide.
    Snapping,
}

/// Which motion source currently owns the position. The drag and snap data
/// only exist while their variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    /// Nothing moves the position.
    #[default]
    Idle,
    /// A drag owns the position.
    Dragging(DragSession),
    /// A snap owns the position.
    Snapping(SnapAnimator),
}

impl Motion {
    /// The public mode for this motion.
    pub fn mode(&self) -> Mode {
        match self {
            Motion::Idle => Mode::Idle,
            Motion::Dragging(_) => Mode::Dragging,
            Motion::Snapping(_) => Mode::Snapping,
        }
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        match self {
            Motion::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// The active snap, if any.
    pub fn snap(&self) -> Option<&SnapAnimator> {
        match self {
            Motion::Snapping(snap) => Some(snap),
            _ => None,
        }
    }
}

/// Position, index and motion of one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    /// Number of slides in the loop.
    pub total: usize,
    /// Canonical active slide. Only changes when a snap completes.
    pub index: usize,
    /// Fractional circular coordinate in `[0, total)`.
    pub position: f32,
    /// Current owner of the position.
    pub motion: Motion,
    /// Pointer is over the carousel.
    pub hovering: bool,
    /// Last pointer-derived tilt.
    pub tilt: Tilt,
}

impl CarouselState {
    /// Idle at slide 0 on a loop of `total` slides.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            index: 0,
            position: 0.0,
            motion: Motion::Idle,
            hovering: false,
            tilt: Tilt::default(),
        }
    }

    /// Shorthand for `self.motion.mode()`.
    pub fn mode(&self) -> Mode {
        self.motion.mode()
    }

    /// A loop with no slides ignores every message.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Settle on `index`, clearing any fractional drift.
    pub(crate) fn settle(&mut self, index: usize) {
        self.index = index;
        self.position = index as f32;
        self.motion = Motion::Idle;
    }

    pub(crate) fn set_position(&mut self, position: f32) {
        self.position = wrap(position, self.total);
    }

    /// Canonical index while nothing is moving.
    pub fn settled_index(&self) -> Option<usize> {
        (self.mode() == Mode::Idle && !self.is_empty()).then_some(self.index)
    }
}
