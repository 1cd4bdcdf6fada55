//! Input messages and host side effects for the carousel engine

use std::time::Instant;

/// Identifier the host assigns to a pointer for the lifetime of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointerId(pub i32);

/// Input device behind a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse; only the primary button drags.
    Mouse,
    /// Touch contact.
    Touch,
    /// Stylus contact.
    Pen,
}

/// One pointer event sample. `x`/`y` are relative to the viewport's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer this sample belongs to.
    pub id: PointerId,
    /// Horizontal offset (px).
    pub x: f32,
    /// Vertical offset (px).
    pub y: f32,
    /// Device that produced the sample.
    pub kind: PointerKind,
    /// Button index for mouse input: 0 is the primary button.
    pub button: i16,
    /// Event timestamp from the host's clock.
    pub t: Instant,
}

impl PointerSample {
    /// Primary mouse button or any touch/pen contact.
    pub fn is_primary(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == 0
    }
}

/// Arrow-key navigation, for the optional keyboard adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Go to the previous slide.
    Left,
    /// Go to the next slide.
    Right,
}

/// Everything the host can tell the engine. Handled by
/// [`Carousel::update`](crate::Carousel::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    /// Contact starts. Begins a drag, interrupting any snap.
    PointerDown(PointerSample),
    /// Pointer moved: drives the drag and the tilt.
    PointerMove(PointerSample),
    /// Contact ends. Classifies the release and snaps.
    PointerUp(PointerSample),
    /// Contact was cancelled by the host. Resolved like an up.
    PointerCancel(PointerSample),
    /// Frame-synchronized tick with the frame clock's timestamp.
    Frame(Instant),
    /// Viewport size changed (px).
    Resize {
        /// New viewport width.
        width: f32,
        /// New viewport height.
        height: f32,
    },
    /// Host-evaluated media query change for breakpoint `index`.
    BreakpointChanged {
        /// Position in the configured breakpoint list.
        index: usize,
        /// Whether the query now matches.
        matches: bool,
    },
    /// Pointer entered or left the carousel.
    SetHovering {
        /// Entered (`true`) or left.
        hovering: bool,
        /// Event time.
        t: Instant,
    },
    /// Navigate to a slide; the index is wrapped into range.
    GoTo {
        /// Requested slide, possibly negative or past the end.
        index: i64,
        /// Ease towards the slide instead of jumping.
        animate: bool,
        /// Event time.
        t: Instant,
    },
    /// Advance one slide.
    Next(Instant),
    /// Go back one slide.
    Prev(Instant),
    /// Arrow key, honoured only when keyboard navigation is enabled.
    Key {
        /// Which arrow.
        key: NavKey,
        /// Event time.
        t: Instant,
    },
}

/// Side effect the host must perform after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Re-project and apply visuals to every slide.
    Render,
    /// Capture the pointer so moves outside the viewport still arrive.
    CapturePointer(PointerId),
    /// Release pointer capture. Failures on the host side can be ignored.
    ReleasePointer(PointerId),
    /// New value for the autoplay progress indicator, in `[0, 1]`.
    Progress(f32),
}

/// Ordered effects produced by one message. Holds at most one
/// [`Effect::Render`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects(Vec<Effect>);

impl Effects {
    /// No effects.
    pub fn none() -> Self {
        Self::default()
    }

    /// Append an effect, folding repeated renders into one.
    pub fn push(&mut self, effect: Effect) {
        if effect == Effect::Render && self.needs_render() {
            return;
        }
        self.0.push(effect);
    }

    /// Append every effect of `other` in order.
    pub fn extend(&mut self, other: Effects) {
        for effect in other.0 {
            self.push(effect);
        }
    }

    /// Whether a render was requested.
    pub fn needs_render(&self) -> bool {
        self.0.contains(&Effect::Render)
    }

    /// Last progress value reported, if any.
    pub fn progress(&self) -> Option<f32> {
        self.0.iter().rev().find_map(|effect| match effect {
            Effect::Progress(p) => Some(*p),
            _ => None,
        })
    }

    /// Whether the message was a no-op.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Effects in the order the host should apply them.
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.0.iter()
    }
}

impl From<Effect> for Effects {
    fn from(effect: Effect) -> Self {
        Self(vec![effect])
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
