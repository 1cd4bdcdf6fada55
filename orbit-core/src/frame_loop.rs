//! Explicit handle for the host's per-frame callback.
//!
//! The engine never schedules anything itself. The host registers a
//! callback with whatever frame clock it has, hands the resulting handle
//! here, and checks [`FrameLoop::wants_frames`] before re-arming each tick.

/// Opaque scheduler handle value supplied by the host.
pub type FrameHandle = u64;

/// Tracks the host's pending frame callback until teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameLoop {
    handle: Option<FrameHandle>,
    torn_down: bool,
}

impl FrameLoop {
    /// An armed-for-nothing loop that still wants frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the handle of the most recently scheduled frame callback.
    /// Ignored after teardown.
    pub fn arm(&mut self, handle: FrameHandle) {
        if !self.torn_down {
            self.handle = Some(handle);
        }
    }

    /// Handle of the most recently armed callback.
    pub fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }

    /// Whether the host should keep scheduling frame ticks.
    pub fn wants_frames(&self) -> bool {
        !self.torn_down
    }

    /// Set once [`FrameLoop::disarm`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Stop the loop for good and return the handle the host must cancel.
    pub fn disarm(&mut self) -> Option<FrameHandle> {
        self.torn_down = true;
        self.handle.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarm_returns_last_handle_once() {
        let mut frames = FrameLoop::new();
        assert!(frames.wants_frames());
        frames.arm(7);
        frames.arm(8);
        assert_eq!(frames.disarm(), Some(8));
        assert!(!frames.wants_frames());
        assert_eq!(frames.disarm(), None);
    }

    #[test]
    fn arm_after_teardown_is_ignored() {
        let mut frames = FrameLoop::new();
        frames.disarm();
        frames.arm(3);
        assert_eq!(frames.handle(), None);
    }
}
