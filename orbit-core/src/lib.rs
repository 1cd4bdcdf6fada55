//! Continuous circular position engine for pseudo-3D looping carousels.
//!
//! A [`Carousel`] owns a fractional position on a loop of `N` slides. Drag
//! gestures, eased snaps and the autoplay clock all drive that one position,
//! one source at a time, and [`Carousel::frame`] projects it onto per-slide
//! visual parameters every tick.
//!
//! The engine does no I/O and reads no clock: every input is a
//! [`CarouselMessage`] carrying its own timestamp, and every side effect the
//! host must perform comes back as an [`Effect`].

pub mod animator;
pub mod autoplay;
pub mod carousel;
pub mod circular;
pub mod constants;
pub mod frame_loop;
pub mod gesture;
pub mod messages;
pub mod projection;
pub mod state;
mod update;

pub use animator::{SnapAnimator, SnapStep, ease_out_quart};
pub use autoplay::{AutoplayTimer, PauseReason};
pub use carousel::{Carousel, Teardown};
pub use circular::{nearest_index, shortest_delta, wrap, wrap_index};
pub use frame_loop::{FrameHandle, FrameLoop};
pub use gesture::{DragAnchor, DragSession, release_target};
pub use messages::{
    CarouselMessage, Effect, Effects, NavKey, PointerId, PointerKind,
    PointerSample,
};
pub use projection::{Frame, Parallax, SlideVisual, Tilt, active_index, project};
pub use state::{CarouselState, Mode, Motion};

pub use orbit_config;
